//! Bit-banged two-wire bus master
//!
//! Synthesizes START/STOP conditions and MSB-first byte transfers on two
//! open-drain lines. There is no hardware controller and no clock
//! stretching: every line transition is followed by one fixed delay unit.
//!
//! # Transaction
//!
//! ```text
//! START │ ADDR<<1|W │ ACK? │ D0 │ ACK? │ ... │ Dn │ ACK? │ STOP
//! ```
//!
//! The first unacknowledged byte aborts the transaction. A STOP is still
//! issued so the bus is left released.

use halo_hal::{BusTiming, I2cWrite, OpenDrainLines};

/// Direction bit appended to the address byte (write)
const WRITE_BIT: u8 = 0;

/// Which byte of a transaction was not acknowledged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NackStage {
    /// Address byte
    Address,
    /// Payload byte at the given index
    Data(usize),
}

/// Bit-bang transfer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitBangError<E> {
    /// Peripheral did not pull DATA low in the acknowledge slot
    Nack(NackStage),
    /// A line operation failed
    Line(E),
}

impl<E> BitBangError<E> {
    /// Returns true if this is an acknowledgement failure
    pub fn is_nack(&self) -> bool {
        matches!(self, BitBangError::Nack(_))
    }
}

/// Two-wire master driving a pair of open-drain lines
pub struct BitBangI2c<L> {
    lines: L,
    timing: BusTiming,
}

impl<L: OpenDrainLines> BitBangI2c<L> {
    /// Create a new bit-bang master
    ///
    /// The lines are not touched until the first transaction.
    pub fn new(lines: L, timing: BusTiming) -> Self {
        Self { lines, timing }
    }

    /// Current bus timing
    pub fn timing(&self) -> BusTiming {
        self.timing
    }

    /// Borrow the underlying lines
    pub fn lines(&self) -> &L {
        &self.lines
    }

    /// Give back the underlying lines
    pub fn release(self) -> L {
        self.lines
    }

    fn delay(&mut self) {
        self.lines.delay_us(self.timing.delay_us);
    }

    /// START condition: DATA falls while CLOCK is high
    pub fn start(&mut self) -> Result<(), L::Error> {
        self.lines.release_data()?;
        self.lines.release_clock()?;
        self.delay();
        self.lines.low_data()?;
        self.delay();
        self.lines.low_clock()?;
        self.delay();
        Ok(())
    }

    /// STOP condition: DATA rises while CLOCK is high
    pub fn stop(&mut self) -> Result<(), L::Error> {
        self.lines.low_data()?;
        self.delay();
        self.lines.release_clock()?;
        self.delay();
        self.lines.release_data()?;
        self.delay();
        Ok(())
    }

    /// Clock out one byte MSB first and sample the acknowledge bit
    ///
    /// Returns `true` if the peripheral acknowledged (held DATA low during
    /// the ninth clock).
    pub fn write_byte(&mut self, byte: u8) -> Result<bool, L::Error> {
        let mut b = byte;
        for _ in 0..8 {
            self.lines.set_data(b & 0x80 != 0)?;
            self.delay();
            self.lines.release_clock()?;
            self.delay();
            self.lines.low_clock()?;
            self.delay();
            b <<= 1;
        }

        // Hand DATA to the peripheral for the acknowledge slot
        self.lines.release_data()?;
        self.delay();
        self.lines.release_clock()?;
        self.delay();
        let ack = !self.lines.read_data()?;
        self.lines.low_clock()?;
        self.delay();

        Ok(ack)
    }

    /// Abort with STOP after a NACK
    fn abort(&mut self, stage: NackStage) -> Result<(), BitBangError<L::Error>> {
        self.stop().map_err(BitBangError::Line)?;
        Err(BitBangError::Nack(stage))
    }
}

impl<L: OpenDrainLines> I2cWrite for BitBangI2c<L> {
    type Error = BitBangError<L::Error>;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.start().map_err(BitBangError::Line)?;

        let addr_byte = (address << 1) | WRITE_BIT;
        if !self.write_byte(addr_byte).map_err(BitBangError::Line)? {
            return self.abort(NackStage::Address);
        }

        for (index, &byte) in data.iter().enumerate() {
            if !self.write_byte(byte).map_err(BitBangError::Line)? {
                return self.abort(NackStage::Data(index));
            }
        }

        self.stop().map_err(BitBangError::Line)
    }

    fn delay_us(&mut self, us: u32) {
        self.lines.delay_us(us);
    }
}
