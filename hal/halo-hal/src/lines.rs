//! Open-drain line abstractions
//!
//! A two-wire bus has a CLOCK and a DATA line. Both are open-drain: the
//! controller can only pull a line low or let it go, after which the
//! pull-up brings it high.

/// Two open-drain lines and a blocking microsecond delay
///
/// This is the whole capability surface the bit-bang transfer layer needs.
/// Implementations map "release" to high-impedance/pull-up and "low" to an
/// actively driven zero.
pub trait OpenDrainLines {
    /// Error type for line operations
    type Error;

    /// Release CLOCK (let it float high)
    fn release_clock(&mut self) -> Result<(), Self::Error>;

    /// Pull CLOCK low
    fn low_clock(&mut self) -> Result<(), Self::Error>;

    /// Release DATA (let it float high)
    fn release_data(&mut self) -> Result<(), Self::Error>;

    /// Pull DATA low
    fn low_data(&mut self) -> Result<(), Self::Error>;

    /// Sample the DATA line level
    ///
    /// Returns `true` when the line reads high. The line must be released
    /// before sampling, otherwise the controller reads its own low.
    fn read_data(&mut self) -> Result<bool, Self::Error>;

    /// Block for `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Drive DATA to a bit value (1 = release, 0 = low)
    fn set_data(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.release_data()
        } else {
            self.low_data()
        }
    }
}
