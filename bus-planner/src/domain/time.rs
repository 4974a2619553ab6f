//! Time-of-day handling for bus schedules.
//!
//! The dataset provides departure times as "HH:MM" strings. A bus
//! timetable covers a single operating day, so times here are plain
//! minute-of-day values (0–1439) with no date attached; arithmetic
//! that crosses midnight wraps around rather than advancing a date.

use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Minutes in one operating day.
const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day with minute precision.
///
/// Stored as minute-of-day (0–1439), so `Ord` on this type matches
/// lexicographic order on the zero-padded "HH:MM" rendering.
///
/// # Examples
///
/// ```
/// use bus_planner::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
/// assert_eq!(t.minute_of_day(), 14 * 60 + 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, the floor for arrival-anchor clamping.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Parse a time from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_planner::domain::TimeOfDay;
    ///
    /// // Valid times
    /// assert!(TimeOfDay::parse("00:00").is_ok());
    /// assert!(TimeOfDay::parse("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(TimeOfDay::parse("1430").is_err());
    /// assert!(TimeOfDay::parse("14:3").is_err());
    /// assert!(TimeOfDay::parse("24:00").is_err());
    /// assert!(TimeOfDay::parse("12:60").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Ok(TimeOfDay(hour * 60 + minute))
    }

    /// Build from hour and minute components.
    ///
    /// Returns `None` if the components are out of range.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(TimeOfDay(hour * 60 + minute))
    }

    /// Build from a minute-of-day value, wrapping modulo one day.
    pub fn from_minute_of_day(minutes: u16) -> Self {
        TimeOfDay(minutes % MINUTES_PER_DAY)
    }

    /// Returns the minute-of-day value (0–1439).
    pub fn minute_of_day(&self) -> u16 {
        self.0
    }

    /// Returns the hour (0–23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute (0–59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Add a number of minutes, wrapping past midnight.
    ///
    /// A run departing late in the evening can arrive after midnight;
    /// the timetable models one operating day, so the result wraps.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_planner::domain::TimeOfDay;
    ///
    /// let t = TimeOfDay::parse("23:50").unwrap();
    /// assert_eq!(t.plus_minutes(25).to_string(), "00:15");
    /// ```
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        let total = (self.0 as u32 + minutes) % MINUTES_PER_DAY as u32;
        TimeOfDay(total as u16)
    }

    /// Subtract a number of minutes, clamping at midnight.
    ///
    /// Used for arrival-anchored queries: the baseline departure is the
    /// requested arrival minus the run duration, never earlier than
    /// 00:00.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_planner::domain::TimeOfDay;
    ///
    /// let t = TimeOfDay::parse("09:00").unwrap();
    /// assert_eq!(t.minus_minutes_saturating(25).to_string(), "08:35");
    /// assert_eq!(t.minus_minutes_saturating(600).to_string(), "00:00");
    /// ```
    pub fn minus_minutes_saturating(&self, minutes: u32) -> Self {
        let current = self.0 as u32;
        TimeOfDay(current.saturating_sub(minutes) as u16)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u16.
fn parse_two_digits(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some((d1 * 10 + d2) as u16)
}
