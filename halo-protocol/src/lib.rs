//! Halo Panel Frame Protocol
//!
//! This crate defines the 145-byte frame the panel peripheral consumes, the
//! address map from frame positions onto physical display elements, and the
//! wire sequence that delivers a frame over a write-only two-wire bus.
//!
//! # Frame Layout
//!
//! ```text
//! ┌───┬──────────────┬──────────────┬────────────┬──────────┬───────────┬──────────┐
//! │ 0 │ 1..=32       │ 33..=48      │ 59..=80    │ 81..=92  │ 97..=108  │ 113..=124│
//! │ - │ 4 digit slots│ 3 bar groups │ icons      │ ring red │ ring green│ ring blue│
//! └───┴──────────────┴──────────────┴────────────┴──────────┴───────────┴──────────┘
//! ```
//!
//! Every byte is the intensity of one element. Unmapped positions are sent
//! as zero.
//!
//! # Wire Sequence
//!
//! ```text
//! 8 x [START │ 0x78 │ preamble byte │ STOP] + unit delay
//! gap
//! START │ 0x78 │ 145 frame bytes │ STOP
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod frame;
pub mod link;
pub mod map;

pub use frame::{FrameBuffer, Rgb, FRAME_LEN, SEG7_MASK};
pub use link::{FrameLink, LinkConfig, LinkError, PushReport, PANEL_ADDRESS, PREAMBLE};
pub use map::{Group, RingEntry, Slot, RING, RING_LEN};
