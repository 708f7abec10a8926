//! Frame delivery over a write-only two-wire bus
//!
//! A frame push is nine transactions:
//! - eight single-byte preamble transactions, each followed by one unit delay
//! - a gap
//! - one transaction carrying the 145 frame bytes
//!
//! The panel has no readback channel and occasionally misses a sequence, so
//! [`FrameLink::push_frame`] repeats the whole sequence a fixed number of
//! times and ignores individual failures.

use halo_hal::I2cWrite;

use crate::frame::FrameBuffer;

/// 7-bit bus address of the panel
pub const PANEL_ADDRESS: u8 = 0x3C;

/// Preamble bytes, each sent in its own transaction
pub const PREAMBLE: [u8; 8] = [0x3F, 0x48, 0x53, 0x6C, 0x87, 0x98, 0xC0, 0xE0];

/// Frame link configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// 7-bit peripheral address
    pub address: u8,
    /// Delay after each preamble transaction (us)
    pub unit_delay_us: u32,
    /// Delay between the last preamble transaction and the payload (us)
    pub preamble_gap_us: u32,
    /// Number of full sequences per push
    pub repeats: u8,
    /// Delay after every sequence of a push (us)
    pub repeat_gap_us: u32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            address: PANEL_ADDRESS,
            unit_delay_us: 20,
            preamble_gap_us: 33,
            repeats: 8,
            repeat_gap_us: 2_000,
        }
    }
}

/// Frame sequence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError<E> {
    /// Preamble transaction at the given index failed
    Preamble(usize, E),
    /// Payload transaction failed
    Payload(E),
}

impl<E> LinkError<E> {
    /// The underlying bus error
    pub fn into_inner(self) -> E {
        match self {
            LinkError::Preamble(_, e) | LinkError::Payload(e) => e,
        }
    }
}

/// Outcome of a repeated push
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PushReport {
    /// Sequences attempted
    pub attempts: u8,
    /// Sequences that completed without a NACK
    pub delivered: u8,
}

impl PushReport {
    /// Returns true if no attempt got through
    pub fn is_silent(&self) -> bool {
        self.attempts > 0 && self.delivered == 0
    }
}

/// Sends frames to the panel over a two-wire bus
pub struct FrameLink<B> {
    bus: B,
    config: LinkConfig,
}

impl<B: I2cWrite> FrameLink<B> {
    /// Create a frame link over a bus
    pub fn new(bus: B, config: LinkConfig) -> Self {
        Self { bus, config }
    }

    /// Current configuration
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.bus
    }

    /// Send one preamble + payload sequence
    ///
    /// Stops at the first failed transaction. Transactions already on the
    /// wire are not rolled back.
    pub fn send_frame(&mut self, frame: &FrameBuffer) -> Result<(), LinkError<B::Error>> {
        let address = self.config.address;

        for (index, &byte) in PREAMBLE.iter().enumerate() {
            self.bus
                .write(address, &[byte])
                .map_err(|e| LinkError::Preamble(index, e))?;
            self.bus.delay_us(self.config.unit_delay_us);
        }

        self.bus.delay_us(self.config.preamble_gap_us);

        self.bus
            .write(address, frame.as_bytes())
            .map_err(LinkError::Payload)
    }

    /// Send the frame `repeats` times, ignoring failures
    ///
    /// Fire-and-forget: the caller gets no indication whether any attempt
    /// reached the panel.
    pub fn push_frame(&mut self, frame: &FrameBuffer) {
        let _ = self.push_frame_counted(frame);
    }

    /// Same wire behaviour as [`FrameLink::push_frame`], but counts the
    /// attempts that completed
    pub fn push_frame_counted(&mut self, frame: &FrameBuffer) -> PushReport {
        let mut report = PushReport::default();

        for _ in 0..self.config.repeats {
            report.attempts += 1;
            if self.send_frame(frame).is_ok() {
                report.delivered += 1;
            }
            self.bus.delay_us(self.config.repeat_gap_us);
        }

        report
    }
}
