//! `embedded-hal` binding for the open-drain lines
//!
//! Binds [`OpenDrainLines`] to two `embedded-hal` 1.0 pins configured as
//! open-drain outputs (e.g. `OutputOpenDrain` on embassy HALs) and a
//! blocking [`DelayNs`] source. Releasing a line is `set_high()`, pulling it
//! low is `set_low()`, and DATA is sampled through the same pin while it is
//! released. The bus relies on the peripheral's pull-ups.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use halo_hal::OpenDrainLines;

/// Line errors, tagged with the line that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError<C, D> {
    /// CLOCK pin error
    Clock(C),
    /// DATA pin error
    Data(D),
}

/// Open-drain lines on `embedded-hal` pins
pub struct GpioLines<SCL, SDA, D> {
    scl: SCL,
    sda: SDA,
    delay: D,
}

impl<SCL, SDA, D> GpioLines<SCL, SDA, D>
where
    SCL: OutputPin,
    SDA: OutputPin + InputPin,
    D: DelayNs,
{
    /// Create the line pair
    ///
    /// Both pins should already be configured open-drain and released.
    pub fn new(scl: SCL, sda: SDA, delay: D) -> Self {
        Self { scl, sda, delay }
    }

    /// Give back the pins and delay source
    pub fn release(self) -> (SCL, SDA, D) {
        (self.scl, self.sda, self.delay)
    }
}

impl<SCL, SDA, D> OpenDrainLines for GpioLines<SCL, SDA, D>
where
    SCL: OutputPin,
    SDA: OutputPin + InputPin,
    D: DelayNs,
{
    type Error = LineError<SCL::Error, SDA::Error>;

    fn release_clock(&mut self) -> Result<(), Self::Error> {
        self.scl.set_high().map_err(LineError::Clock)
    }

    fn low_clock(&mut self) -> Result<(), Self::Error> {
        self.scl.set_low().map_err(LineError::Clock)
    }

    fn release_data(&mut self) -> Result<(), Self::Error> {
        self.sda.set_high().map_err(LineError::Data)
    }

    fn low_data(&mut self) -> Result<(), Self::Error> {
        self.sda.set_low().map_err(LineError::Data)
    }

    fn read_data(&mut self) -> Result<bool, Self::Error> {
        self.sda.is_high().map_err(LineError::Data)
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock open-drain pin: reads low when driven low or when the
    /// "peripheral" holds it low
    struct MockPin {
        driven_low: bool,
        held_low: bool,
        writes: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                driven_low: false,
                held_low: false,
                writes: 0,
            }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.driven_low = true;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.driven_low = false;
            self.writes += 1;
            Ok(())
        }
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(!self.driven_low && !self.held_low)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            self.is_high().map(|high| !high)
        }
    }

    /// Mock delay accumulating nanoseconds
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    fn lines() -> GpioLines<MockPin, MockPin, MockDelay> {
        GpioLines::new(MockPin::new(), MockPin::new(), MockDelay { total_ns: 0 })
    }

    #[test]
    fn test_release_and_low_map_to_pin_levels() {
        let mut l = lines();

        l.low_clock().unwrap();
        l.low_data().unwrap();
        assert!(l.scl.driven_low);
        assert!(l.sda.driven_low);

        l.release_clock().unwrap();
        l.release_data().unwrap();
        assert!(!l.scl.driven_low);
        assert!(!l.sda.driven_low);
    }

    #[test]
    fn test_read_data_sees_peripheral_pull() {
        let mut l = lines();
        l.release_data().unwrap();
        assert!(l.read_data().unwrap());

        l.sda.held_low = true;
        assert!(!l.read_data().unwrap());
    }

    #[test]
    fn test_set_data_bit_values() {
        let mut l = lines();
        l.set_data(false).unwrap();
        assert!(l.sda.driven_low);
        l.set_data(true).unwrap();
        assert!(!l.sda.driven_low);
        assert_eq!(l.sda.writes, 2);
        assert_eq!(l.scl.writes, 0);
    }

    #[test]
    fn test_delay_in_microseconds() {
        let mut l = lines();
        l.delay_us(20);
        l.delay_us(33);
        let (_, _, delay) = l.release();
        assert_eq!(delay.total_ns, 53_000);
    }
}
