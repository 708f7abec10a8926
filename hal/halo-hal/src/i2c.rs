//! Two-wire (I2C-style) write abstractions
//!
//! The panel peripheral is write-only, so only the write half of a bus
//! master is modelled here.

/// Write-only two-wire bus master
///
/// One call to [`I2cWrite::write`] is one complete transaction:
/// START, address byte, payload bytes, STOP.
pub trait I2cWrite {
    /// Error type for bus operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit device address
    /// * `data` - Payload bytes, sent in order
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Block for `us` microseconds using the bus timing source
    fn delay_us(&mut self, us: u32);
}

impl<T: I2cWrite + ?Sized> I2cWrite for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }

    fn delay_us(&mut self, us: u32) {
        T::delay_us(self, us)
    }
}

/// Bit-bang bus timing
///
/// There is no clock negotiation: every line transition is followed by the
/// same fixed delay, which must cover the peripheral's setup/hold times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusTiming {
    /// Delay after each line transition, in microseconds
    pub delay_us: u32,
}

impl Default for BusTiming {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl BusTiming {
    /// Slow, stable timing (20 us per transition, roughly 16 kHz SCL)
    pub const STANDARD: Self = Self { delay_us: 20 };

    /// Faster timing for short wires (5 us per transition)
    pub const FAST: Self = Self { delay_us: 5 };

    /// Approximate SCL frequency in Hz
    ///
    /// Each bit spends three delay units (data setup, clock high, clock
    /// low).
    pub const fn approx_frequency_hz(&self) -> u32 {
        if self.delay_us == 0 {
            return 0;
        }
        1_000_000 / (3 * self.delay_us)
    }
}
