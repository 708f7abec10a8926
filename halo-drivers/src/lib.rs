//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in halo-hal:
//!
//! - Bit-banged two-wire master over any [`halo_hal::OpenDrainLines`]
//! - `embedded-hal` pin binding for the open-drain lines

#![no_std]
#![deny(unsafe_code)]

pub mod bitbang;
pub mod lines;

pub use bitbang::{BitBangError, BitBangI2c, NackStage};
pub use lines::{GpioLines, LineError};
