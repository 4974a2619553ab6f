//! Full-day timetable view.
//!
//! Buckets every scheduled run of a segment into hour groups for the
//! timetable screen. Unlike the search flow there is no next-day
//! fallback here: an absent segment is a flat "not found".

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::dataset::ScheduleDataset;
use crate::domain::{ScheduleVariant, StopName, TimeOfDay};

use super::search::SearchError;

/// One run in the timetable view.
///
/// Carries no congestion estimate; the timetable screen shows times,
/// duration and fare only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableEntry {
    pub departure: TimeOfDay,
    pub arrival: TimeOfDay,
    pub duration_minutes: u32,
    pub fare: u32,
}

/// All runs departing within one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourGroup {
    /// Departure hour (0–23).
    pub hour: u16,
    /// Runs in this hour, chronological.
    pub entries: Vec<TimetableEntry>,
}

impl HourGroup {
    /// The display label for this group, e.g. `"08時"`.
    pub fn label(&self) -> String {
        format!("{:02}時", self.hour)
    }
}

/// Build the full-day timetable for a stop pair.
///
/// The schedule variant comes from `date` when given, otherwise from
/// `today`. Groups are ascending by hour; entries within a group are
/// chronological. An absent segment (or one with no runs) is
/// [`SearchError::RouteNotFound`] so the caller can show an explicit
/// empty state.
pub fn build_timetable(
    dataset: &ScheduleDataset,
    departure: &str,
    arrival: &str,
    date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<Vec<HourGroup>, SearchError> {
    let departure_stop = StopName::canonicalize(departure);
    let arrival_stop = StopName::canonicalize(arrival);
    let variant = ScheduleVariant::for_date(date.unwrap_or(today));

    let segment = dataset
        .segment(&departure_stop, &arrival_stop, variant)
        .ok_or_else(|| SearchError::RouteNotFound {
            departure: departure.to_string(),
            arrival: arrival.to_string(),
        })?;

    // BTreeMap keys give the ascending hour order; entries arrive in
    // timetable order, which is already chronological within an hour.
    let mut groups: BTreeMap<u16, Vec<TimetableEntry>> = BTreeMap::new();
    for &time in segment.departures {
        groups.entry(time.hour()).or_default().push(TimetableEntry {
            departure: time,
            arrival: time.plus_minutes(segment.duration_minutes),
            duration_minutes: segment.duration_minutes,
            fare: segment.fare,
        });
    }

    debug!(
        departure = %departure_stop,
        arrival = %arrival_stop,
        variant = variant.as_key(),
        hours = groups.len(),
        "timetable built"
    );

    Ok(groups
        .into_iter()
        .map(|(hour, entries)| HourGroup { hour, entries })
        .collect())
}
