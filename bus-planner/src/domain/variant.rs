//! Schedule variant classification.
//!
//! The operator runs three timetable profiles: weekdays during
//! university term, weekdays outside term, and weekends. Which one
//! applies is a pure function of the calendar date — weekday plus a
//! fixed academic-calendar heuristic, with no external holiday feed.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;

/// One of the three timetable profiles the dataset is keyed by.
///
/// Exactly one variant applies to any calendar date; see
/// [`ScheduleVariant::for_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleVariant {
    /// Weekday during university term.
    WeekdaySchool,
    /// Weekday outside term (vacation periods).
    WeekdayNoSchool,
    /// Saturday, Sunday.
    WeekendNoSchool,
}

impl ScheduleVariant {
    /// The dataset key for this variant.
    pub fn as_key(&self) -> &'static str {
        match self {
            ScheduleVariant::WeekdaySchool => "weekdaySchool",
            ScheduleVariant::WeekdayNoSchool => "weekdayNoSchool",
            ScheduleVariant::WeekendNoSchool => "weekendNoSchool",
        }
    }

    /// Classify a calendar date into its schedule variant.
    ///
    /// Saturday and Sunday always map to [`WeekendNoSchool`], even when
    /// they fall inside a vacation window. Other days map to
    /// [`WeekdaySchool`] unless the date falls in one of the fixed
    /// out-of-session windows: July 20–31, all of August, December
    /// 25–31, January 1–7, March 25–31, April 1–7.
    ///
    /// The vacation windows are a deliberate business-rule
    /// approximation with no source of truth for actual term dates;
    /// public holidays on weekdays are not modelled.
    ///
    /// [`WeekendNoSchool`]: ScheduleVariant::WeekendNoSchool
    /// [`WeekdaySchool`]: ScheduleVariant::WeekdaySchool
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_planner::domain::ScheduleVariant;
    /// use chrono::NaiveDate;
    ///
    /// // A Wednesday in term
    /// let date = NaiveDate::from_ymd_opt(2025, 5, 14).unwrap();
    /// assert_eq!(ScheduleVariant::for_date(date), ScheduleVariant::WeekdaySchool);
    ///
    /// // A Wednesday in August
    /// let date = NaiveDate::from_ymd_opt(2025, 8, 13).unwrap();
    /// assert_eq!(ScheduleVariant::for_date(date), ScheduleVariant::WeekdayNoSchool);
    ///
    /// // A Saturday, regardless of term
    /// let date = NaiveDate::from_ymd_opt(2025, 5, 17).unwrap();
    /// assert_eq!(ScheduleVariant::for_date(date), ScheduleVariant::WeekendNoSchool);
    /// ```
    pub fn for_date(date: NaiveDate) -> Self {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return ScheduleVariant::WeekendNoSchool;
        }
        if in_vacation_window(date.month(), date.day()) {
            ScheduleVariant::WeekdayNoSchool
        } else {
            ScheduleVariant::WeekdaySchool
        }
    }
}

/// The fixed out-of-session windows of the academic calendar.
fn in_vacation_window(month: u32, day: u32) -> bool {
    (month == 7 && day >= 20)
        || month == 8
        || (month == 12 && day >= 25)
        || (month == 1 && day <= 7)
        || (month == 3 && day >= 25)
        || (month == 4 && day <= 7)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_in_term() {
        // Monday 2025-06-02
        assert_eq!(
            ScheduleVariant::for_date(date(2025, 6, 2)),
            ScheduleVariant::WeekdaySchool
        );
    }

    #[test]
    fn weekend_always_weekend() {
        // Saturday in term
        assert_eq!(
            ScheduleVariant::for_date(date(2025, 6, 7)),
            ScheduleVariant::WeekendNoSchool
        );
        // Sunday in August (vacation overlap: weekend still wins)
        assert_eq!(
            ScheduleVariant::for_date(date(2025, 8, 10)),
            ScheduleVariant::WeekendNoSchool
        );
    }

    #[test]
    fn vacation_window_boundaries() {
        // July 19 (Fri 2024) is in term; July 22 (Mon 2024) is not
        assert_eq!(
            ScheduleVariant::for_date(date(2024, 7, 19)),
            ScheduleVariant::WeekdaySchool
        );
        assert_eq!(
            ScheduleVariant::for_date(date(2024, 7, 22)),
            ScheduleVariant::WeekdayNoSchool
        );

        // All of August is out of session
        assert_eq!(
            ScheduleVariant::for_date(date(2025, 8, 1)),
            ScheduleVariant::WeekdayNoSchool
        );

        // Winter break: Dec 25 – Jan 7
        assert_eq!(
            ScheduleVariant::for_date(date(2024, 12, 25)),
            ScheduleVariant::WeekdayNoSchool
        );
        assert_eq!(
            ScheduleVariant::for_date(date(2025, 1, 7)),
            ScheduleVariant::WeekdayNoSchool
        );
        assert_eq!(
            ScheduleVariant::for_date(date(2025, 1, 8)),
            ScheduleVariant::WeekdaySchool
        );

        // Spring break: Mar 25 – Apr 7
        assert_eq!(
            ScheduleVariant::for_date(date(2025, 3, 25)),
            ScheduleVariant::WeekdayNoSchool
        );
        assert_eq!(
            ScheduleVariant::for_date(date(2025, 4, 7)),
            ScheduleVariant::WeekdayNoSchool
        );
        assert_eq!(
            ScheduleVariant::for_date(date(2025, 4, 8)),
            ScheduleVariant::WeekdaySchool
        );
    }

    #[test]
    fn dataset_keys() {
        assert_eq!(ScheduleVariant::WeekdaySchool.as_key(), "weekdaySchool");
        assert_eq!(ScheduleVariant::WeekdayNoSchool.as_key(), "weekdayNoSchool");
        assert_eq!(ScheduleVariant::WeekendNoSchool.as_key(), "weekendNoSchool");
    }

    #[test]
    fn deserializes_from_dataset_keys() {
        let v: ScheduleVariant = serde_json::from_str("\"weekdaySchool\"").unwrap();
        assert_eq!(v, ScheduleVariant::WeekdaySchool);
        let v: ScheduleVariant = serde_json::from_str("\"weekendNoSchool\"").unwrap();
        assert_eq!(v, ScheduleVariant::WeekendNoSchool);
    }
}
