//! Time anchor resolution.
//!
//! A query is anchored either at a departure time ("leave at T") or an
//! arrival time ("arrive by T"), or not at all, in which case the
//! current wall clock applies. The anchor resolves to a baseline
//! departure time: the minute of day from which upcoming runs are
//! selected.

use chrono::{NaiveDate, Timelike};

use crate::domain::TimeOfDay;

/// Whether the anchored time constrains departure or arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    /// Depart at the anchored time or later.
    Departure,
    /// Arrive by the anchored time.
    Arrival,
}

/// A user-specified date and time constraint for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAnchor {
    pub kind: AnchorKind,
    pub date: NaiveDate,
    pub time: TimeOfDay,
}

/// A wall-clock snapshot, taken once per query by the caller.
///
/// The engine never reads the clock itself; re-resolving the same
/// anchor with the same moment always yields the same baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub date: NaiveDate,
    pub time: TimeOfDay,
}

impl Moment {
    /// Snapshot the local wall clock, truncated to minutes.
    pub fn current() -> Self {
        let now = chrono::Local::now().naive_local();
        Self {
            date: now.date(),
            // Hour and minute of a chrono time are always in range.
            time: TimeOfDay::from_minute_of_day((now.hour() * 60 + now.minute()) as u16),
        }
    }
}

/// Compute the baseline departure time for a search.
///
/// - No anchor: the current wall-clock time.
/// - Departure anchor: the anchored time itself.
/// - Arrival anchor: the anchored time minus the run duration, clamped
///   at 00:00 so the baseline never leaves the operating day.
///
/// # Examples
///
/// ```
/// use bus_planner::domain::TimeOfDay;
/// use bus_planner::planner::{AnchorKind, Moment, TimeAnchor, resolve_baseline};
/// use chrono::NaiveDate;
///
/// let now = Moment {
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     time: TimeOfDay::parse("12:00").unwrap(),
/// };
/// let anchor = TimeAnchor {
///     kind: AnchorKind::Arrival,
///     date: now.date,
///     time: TimeOfDay::parse("09:00").unwrap(),
/// };
///
/// // Arrive by 09:00 on a 25-minute run: leave by 08:35
/// assert_eq!(resolve_baseline(Some(&anchor), 25, now).to_string(), "08:35");
///
/// // No anchor: the wall clock
/// assert_eq!(resolve_baseline(None, 25, now).to_string(), "12:00");
/// ```
pub fn resolve_baseline(
    anchor: Option<&TimeAnchor>,
    duration_minutes: u32,
    now: Moment,
) -> TimeOfDay {
    match anchor {
        None => now.time,
        Some(anchor) => match anchor.kind {
            AnchorKind::Departure => anchor.time,
            AnchorKind::Arrival => anchor.time.minus_minutes_saturating(duration_minutes),
        },
    }
}

/// The calendar date a query applies to: the anchor's date if one was
/// given, otherwise today. Feeds the schedule variant classifier.
pub fn effective_date(anchor: Option<&TimeAnchor>, now: Moment) -> NaiveDate {
    anchor.map(|a| a.date).unwrap_or(now.date)
}
