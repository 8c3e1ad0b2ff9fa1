//! Time-of-day handling for itineraries.
//!
//! An itinerary day runs on a cursor that starts in the morning and only
//! moves forward. Late return trips can push it past midnight, so `DayTime`
//! counts minutes from the start of the day without wrapping, and only wraps
//! when displayed.

use chrono::Duration;
use std::fmt;
use std::ops::Add;

/// Minutes in a day.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time on an itinerary day, in minutes since midnight.
///
/// # Examples
///
/// ```
/// use trip_server::domain::DayTime;
/// use chrono::Duration;
///
/// let start = DayTime::at_hour(8);
/// let later = start + Duration::minutes(90);
/// assert_eq!(later.to_string(), "09:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayTime {
    minutes: u32,
}

impl DayTime {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: DayTime = DayTime { minutes: 0 };

    /// Create a time on the hour. Hours past 23 are clamped to 23:00.
    pub const fn at_hour(hour: u32) -> Self {
        let hour = if hour > 23 { 23 } else { hour };
        Self { minutes: hour * 60 }
    }

    /// Returns the hour on a 24h clock.
    pub fn hour(&self) -> u32 {
        (self.minutes % MINUTES_PER_DAY) / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }

    /// Add a duration, returning `None` on overflow or if the result would
    /// be before midnight.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        let minutes = i64::from(self.minutes).checked_add(duration.num_minutes())?;
        let minutes = u32::try_from(minutes).ok()?;
        Some(Self { minutes })
    }
}

impl Add<Duration> for DayTime {
    type Output = Self;

    /// Saturates at midnight for negative results.
    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs).unwrap_or(if rhs < Duration::zero() {
            DayTime::MIDNIGHT
        } else {
            DayTime { minutes: u32::MAX }
        })
    }
}

impl fmt::Debug for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayTime({:02}:{:02}", self.hour(), self.minute())?;
        let days = self.minutes / MINUTES_PER_DAY;
        if days > 0 {
            write!(f, " +{days}d")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Convert fractional hours to a duration, rounded to the minute.
pub fn hours(h: f64) -> Duration {
    Duration::minutes((h * 60.0).round() as i64)
}

/// Express a duration as fractional hours.
pub fn as_hours(d: Duration) -> f64 {
    d.num_minutes() as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32, minute: i64) -> DayTime {
        DayTime::at_hour(hour) + Duration::minutes(minute)
    }

    #[test]
    fn hour_and_minute() {
        assert_eq!(time(0, 0), DayTime::MIDNIGHT);
        assert_eq!((time(8, 30).hour(), time(8, 30).minute()), (8, 30));
        assert_eq!(time(23, 59).to_string(), "23:59");
    }

    #[test]
    fn at_hour_clamps() {
        assert_eq!(DayTime::at_hour(30), time(23, 0));
        assert_eq!(DayTime::at_hour(30).to_string(), "23:00");
    }

    #[test]
    fn add_duration() {
        assert_eq!(time(8, 0) + Duration::minutes(150), time(10, 30));
        assert_eq!(time(8, 0) + hours(1.5), time(9, 30));
    }

    #[test]
    fn crossing_midnight_keeps_counting() {
        let late = time(22, 0) + Duration::hours(3);
        assert_eq!(late.to_string(), "01:00");
        assert!(late > time(23, 59));
        assert_eq!(format!("{:?}", late), "DayTime(01:00 +1d)");
        assert_eq!(format!("{:?}", time(9, 5)), "DayTime(09:05)");
    }

    #[test]
    fn negative_add_saturates() {
        assert_eq!(time(1, 0) + Duration::hours(-5), DayTime::MIDNIGHT);
        assert!(time(1, 0).checked_add(Duration::hours(-5)).is_none());
    }

    #[test]
    fn hours_conversions() {
        assert_eq!(hours(0.5), Duration::minutes(30));
        assert_eq!(hours(2.0), Duration::hours(2));
        assert_eq!(as_hours(Duration::minutes(90)), 1.5);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any time of day displays as zero-padded HH:MM
        #[test]
        fn displays_padded(h in 0u32..24, m in 0i64..60) {
            let t = DayTime::at_hour(h) + Duration::minutes(m);
            prop_assert_eq!(t.to_string(), format!("{h:02}:{m:02}"));
        }

        /// Adding a non-negative duration never moves the cursor backwards
        #[test]
        fn add_is_monotonic(h in 0u32..24, mins in 0i64..2000) {
            let t = DayTime::at_hour(h);
            prop_assert!(t + Duration::minutes(mins) >= t);
        }
    }
}
