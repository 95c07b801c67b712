//! Wall-clock sampling.
//!
//! The fractal hands are driven by a single scalar, `combined_units`: the
//! position inside the current hour measured in centiseconds, so the tree
//! moves smoothly instead of jumping once per second.

use chrono::Timelike;

const CENTIS_PER_MINUTE: f64 = 6000.0;
const CENTIS_PER_SECOND: f64 = 100.0;
const MILLIS_PER_CENTI: f64 = 10.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Time-of-day decomposition sampled once per frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ClockTime {
    /// `0..24`
    pub hours: u32,
    /// `0..60`
    pub minutes: u32,
    /// `0..60`
    pub seconds: u32,
    /// `0..1000`
    pub milliseconds: u32,
}

/// Integer drivers of the fractal recursion, derived once per frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Drivers {
    /// `combined_units`, truncated.
    pub seconds: i64,
    /// `combined_units / 60`, truncated.
    pub minutes: i64,
}

impl ClockTime {
    #[inline]
    pub fn new(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        debug_assert!(hours < 24 && minutes < 60 && seconds < 60 && milliseconds < 1000);
        Self { hours, minutes, seconds, milliseconds }
    }

    /// Samples any chrono time-of-day value.
    ///
    /// Leap-second nanoseconds (`>= 1e9`) are folded into the last millisecond.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hours: t.hour(),
            minutes: t.minute(),
            seconds: t.second(),
            milliseconds: (t.nanosecond() / 1_000_000).min(999),
        }
    }

    /// Centiseconds elapsed in the current hour.
    #[inline]
    pub fn combined_units(self) -> f64 {
        f64::from(self.minutes) * CENTIS_PER_MINUTE
            + f64::from(self.seconds) * CENTIS_PER_SECOND
            + f64::from(self.milliseconds) / MILLIS_PER_CENTI
    }

    #[inline]
    pub fn drivers(self) -> Drivers {
        let combined = self.combined_units();
        Drivers {
            seconds: combined as i64,
            minutes: (combined / SECONDS_PER_MINUTE) as i64,
        }
    }

    /// Whole seconds since midnight; drives the hour hand.
    #[inline]
    pub fn seconds_since_midnight(self) -> f64 {
        f64::from(self.seconds) + f64::from(self.minutes) * 60.0 + f64::from(self.hours) * 3600.0
    }
}

/// Source of the current time of day.
pub trait TimeSource {
    fn now(&self) -> ClockTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> ClockTime {
        ClockTime::from_timelike(&chrono::Local::now())
    }
}

/// Always returns the same time. Useful for stills and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock(pub ClockTime);

impl TimeSource for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}
