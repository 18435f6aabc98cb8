/// Logic level of the two-wire current loop.
///
/// The protocol engine reasons in `Idle`/`Active` terms; how those map onto
/// physical voltage or current thresholds is the line driver's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// The resting level of the line between frames.
    Idle,
    /// The asserted level; the leading half of a logical "1" bit.
    Active,
}

impl Level {
    /// Returns true for [`Level::Active`].
    pub fn is_active(self) -> bool {
        matches!(self, Level::Active)
    }
}

/// Contract between the protocol core and the physical line.
///
/// Implementations must provide a monotonic microsecond clock. The clock is
/// deliberately a wrapping `u32` — small MCU timers wrap after ~71 minutes —
/// so every interval comparison in the engine goes through
/// [`elapsed_micros`].
pub trait LineDriver {
    /// Sample the current input level.
    fn read_level(&self) -> Level;

    /// Assert the output line.
    fn drive_active(&mut self);

    /// Release the output line to its resting level.
    fn drive_idle(&mut self);

    /// Current value of the monotonic microsecond clock. Wraps at `u32::MAX`.
    fn now_micros(&self) -> u32;

    /// Busy-wait for `micros` microseconds.
    ///
    /// Bit timing is built on this primitive, so implementations must not
    /// round the interval up or down by more than a few microseconds.
    fn delay_micros(&mut self, micros: u32);
}

/// Wraparound-safe interval between two clock readings.
///
/// `earlier` must be a reading taken no more than one wrap (~71 minutes)
/// before `now`; within that window the result is exact even across the
/// wrap point.
pub fn elapsed_micros(now: u32, earlier: u32) -> u32 {
    now.wrapping_sub(earlier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_plain() {
        assert_eq!(elapsed_micros(1500, 500), 1000);
        assert_eq!(elapsed_micros(42, 42), 0);
    }

    #[test]
    fn elapsed_across_wrap() {
        assert_eq!(elapsed_micros(499, u32::MAX - 500), 1000);
        assert_eq!(elapsed_micros(0, u32::MAX), 1);
    }

    #[test]
    fn level_classification() {
        assert!(Level::Active.is_active());
        assert!(!Level::Idle.is_active());
    }
}
