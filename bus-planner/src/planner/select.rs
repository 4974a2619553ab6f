//! Run selection and annotation.
//!
//! Given a segment and a baseline time, select a contiguous window of
//! upcoming scheduled runs and annotate each with its arrival time,
//! fare, duration, and congestion estimate. When the baseline is past
//! the last run of the day, the window falls back to the first runs of
//! the same table, labelled as next-day.

use crate::dataset::Segment;
use crate::domain::{Congestion, TimeOfDay};

/// Which operating day a result window belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    /// Runs on the queried day.
    Today,
    /// No run remains on the queried day; these are the next day's
    /// first runs from the same timetable.
    NextDay,
}

/// One annotated scheduled run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// 1-based position of this run in the segment's full timetable.
    pub sequence: usize,
    /// Scheduled departure time.
    pub departure: TimeOfDay,
    /// Computed arrival time; wraps past midnight for late runs.
    pub arrival: TimeOfDay,
    /// Run duration in minutes (constant per segment).
    pub duration_minutes: u32,
    /// Fare in yen (constant per segment).
    pub fare: u32,
    /// Crowding estimate from the departure hour.
    pub congestion: Congestion,
}

/// A contiguous window of annotated runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunWindow {
    /// The annotated runs, chronological, at most `window_size` of them.
    pub runs: Vec<RunResult>,
    /// Whether these runs are today's or the next-day fallback.
    pub day: DayLabel,
    /// Index into the segment's timetable of the first run in `runs`.
    pub start: usize,
    /// Total number of runs in the segment's timetable, for paging caps.
    pub timetable_len: usize,
}

/// Find the first timetable index departing at or after `baseline`.
///
/// The timetable is non-decreasing (validated at dataset load), so a
/// binary search finds the first match; ties between equal times break
/// to the earliest index. Returns `None` when every run departs before
/// the baseline.
pub fn first_at_or_after(departures: &[TimeOfDay], baseline: TimeOfDay) -> Option<usize> {
    let index = departures.partition_point(|t| *t < baseline);
    (index < departures.len()).then_some(index)
}

/// Select the window of runs starting at `baseline`.
///
/// The window is `[first + offset, first + offset + window_size)`
/// clamped to the table bounds. When the baseline is later than every
/// run of the day, the window wraps to the start of the same table and
/// is labelled [`DayLabel::NextDay`].
pub fn select_runs(
    segment: Segment<'_>,
    baseline: TimeOfDay,
    window_size: usize,
    offset: usize,
) -> RunWindow {
    match first_at_or_after(segment.departures, baseline) {
        Some(first) => window_at(segment, first + offset, window_size, DayLabel::Today),
        None => window_at(segment, offset, window_size, DayLabel::NextDay),
    }
}

/// Annotate the window `[start, start + window_size)`, clamped to the
/// table bounds.
///
/// This is the single annotation path: initial searches and paging both
/// come through here, so a shifted window is always recomputed rather
/// than patched up from cached results.
pub fn window_at(
    segment: Segment<'_>,
    start: usize,
    window_size: usize,
    day: DayLabel,
) -> RunWindow {
    let len = segment.departures.len();
    let start = start.min(len);
    let end = (start + window_size).min(len);

    let runs = segment.departures[start..end]
        .iter()
        .enumerate()
        .map(|(i, &departure)| annotate(segment, start + i, departure))
        .collect();

    RunWindow {
        runs,
        day,
        start,
        timetable_len: len,
    }
}

/// Annotate a single run with arrival, fare, and congestion.
fn annotate(segment: Segment<'_>, index: usize, departure: TimeOfDay) -> RunResult {
    RunResult {
        sequence: index + 1,
        departure,
        arrival: departure.plus_minutes(segment.duration_minutes),
        duration_minutes: segment.duration_minutes,
        fare: segment.fare,
        congestion: Congestion::for_departure_hour(departure.hour()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(raw: &[&str]) -> Vec<TimeOfDay> {
        raw.iter().map(|s| TimeOfDay::parse(s).unwrap()).collect()
    }

    fn segment(departures: &[TimeOfDay]) -> Segment<'_> {
        Segment {
            duration_minutes: 25,
            fare: 230,
            departures,
        }
    }

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    #[test]
    fn first_at_or_after_basic() {
        let table = times(&["08:00", "08:20", "08:40", "09:00"]);
        assert_eq!(first_at_or_after(&table, t("08:25")), Some(2));
        assert_eq!(first_at_or_after(&table, t("08:20")), Some(1));
        assert_eq!(first_at_or_after(&table, t("07:00")), Some(0));
        assert_eq!(first_at_or_after(&table, t("09:01")), None);
    }

    #[test]
    fn first_at_or_after_ties_break_earliest() {
        let table = times(&["08:00", "08:20", "08:20", "08:40"]);
        assert_eq!(first_at_or_after(&table, t("08:20")), Some(1));
    }

    #[test]
    fn first_at_or_after_empty() {
        assert_eq!(first_at_or_after(&[], t("08:00")), None);
    }

    #[test]
    fn window_from_baseline() {
        let table = times(&["08:00", "08:20", "08:40", "09:00", "09:20"]);
        let window = select_runs(segment(&table), t("08:25"), 4, 0);

        assert_eq!(window.day, DayLabel::Today);
        assert_eq!(window.start, 2);
        let departures: Vec<String> =
            window.runs.iter().map(|r| r.departure.to_string()).collect();
        assert_eq!(departures, ["08:40", "09:00", "09:20"]);
    }

    #[test]
    fn annotation_uses_segment_scalars() {
        let table = times(&["08:40"]);
        let window = select_runs(segment(&table), t("08:00"), 4, 0);
        let run = &window.runs[0];

        assert_eq!(run.arrival.to_string(), "09:05");
        assert_eq!(run.duration_minutes, 25);
        assert_eq!(run.fare, 230);
        assert_eq!(run.congestion, Congestion::Congested);
        assert_eq!(run.sequence, 1);
    }

    #[test]
    fn sequence_counts_from_timetable_start() {
        let table = times(&["08:00", "08:20", "08:40", "09:00", "09:20"]);
        let window = select_runs(segment(&table), t("08:25"), 2, 0);
        let sequences: Vec<usize> = window.runs.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, [3, 4]);
    }

    #[test]
    fn window_never_exceeds_window_size() {
        let table = times(&["08:00", "08:20", "08:40", "09:00", "09:20"]);
        let window = select_runs(segment(&table), t("00:00"), 4, 0);
        assert_eq!(window.runs.len(), 4);
    }

    #[test]
    fn window_clamped_at_table_end() {
        let table = times(&["08:00", "08:20", "08:40"]);
        let window = select_runs(segment(&table), t("08:30"), 4, 0);
        assert_eq!(window.runs.len(), 1);
        assert_eq!(window.runs[0].departure.to_string(), "08:40");
    }

    #[test]
    fn offset_shifts_window() {
        let table = times(&["08:00", "08:20", "08:40", "09:00", "09:20"]);
        let window = select_runs(segment(&table), t("08:00"), 2, 1);
        assert_eq!(window.start, 1);
        let departures: Vec<String> =
            window.runs.iter().map(|r| r.departure.to_string()).collect();
        assert_eq!(departures, ["08:20", "08:40"]);
    }

    #[test]
    fn baseline_past_last_run_falls_back_to_next_day() {
        let table = times(&["08:00", "08:20", "08:40", "09:00", "09:20"]);
        let window = select_runs(segment(&table), t("23:00"), 4, 0);

        assert_eq!(window.day, DayLabel::NextDay);
        assert_eq!(window.start, 0);
        let departures: Vec<String> =
            window.runs.iter().map(|r| r.departure.to_string()).collect();
        assert_eq!(departures, ["08:00", "08:20", "08:40", "09:00"]);
    }

    #[test]
    fn late_run_arrival_wraps_past_midnight() {
        let table = times(&["23:50"]);
        let window = select_runs(segment(&table), t("23:00"), 4, 0);
        assert_eq!(window.runs[0].arrival.to_string(), "00:15");
    }

    #[test]
    fn congestion_annotated_per_run() {
        let table = times(&["06:30", "07:00", "12:00", "17:00"]);
        let window = select_runs(segment(&table), t("00:00"), 4, 0);
        let labels: Vec<Congestion> = window.runs.iter().map(|r| r.congestion).collect();
        assert_eq!(
            labels,
            [
                Congestion::SlightlyCongested,
                Congestion::Congested,
                Congestion::Normal,
                Congestion::Congested,
            ]
        );
    }

    #[test]
    fn window_at_start_beyond_len_is_empty() {
        let table = times(&["08:00"]);
        let window = window_at(segment(&table), 5, 4, DayLabel::Today);
        assert!(window.runs.is_empty());
        assert_eq!(window.start, 1);
    }
}
