//! Halo Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the panel driver is
//! written against. Board code binds them to real pins; tests bind them to
//! simulated lines.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  halo-protocol (frame link)             │
//! └─────────────────────────────────────────┘
//!                     │  I2cWrite
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  halo-drivers (bit-bang transfers)      │
//! └─────────────────────────────────────────┘
//!                     │  OpenDrainLines
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  board pins / simulated peripheral      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`lines::OpenDrainLines`] - Two open-drain lines plus a microsecond delay
//! - [`i2c::I2cWrite`] - Addressed write transactions

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod lines;

// Re-export key traits at crate root for convenience
pub use i2c::{BusTiming, I2cWrite};
pub use lines::OpenDrainLines;
