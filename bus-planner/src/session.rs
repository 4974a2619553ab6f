//! UI-adjacent session state.
//!
//! The engine in [`crate::planner`] is pure; something still has to
//! remember what the user last searched so the "one earlier" / "one
//! later" buttons can page through consecutive runs. That state lives
//! here, in an explicit struct the caller owns, instead of a global
//! store.
//!
//! The session is also where primitive UI inputs (stop names, ISO
//! dates, "HH:MM" strings) are parsed and where the wall clock is
//! read, so everything below this layer is deterministic.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::dataset::ScheduleDataset;
use crate::domain::{ScheduleVariant, StopName, TimeError, TimeOfDay};
use crate::planner::{
    AnchorKind, DayLabel, HourGroup, Moment, SearchConfig, SearchError, SearchOutcome,
    SearchQuery, TimeAnchor, build_timetable, search, window_at,
};

/// The default route pair the original search screen opens on.
pub const DEFAULT_DEPARTURE: &str = "関西大学";
pub const DEFAULT_ARRIVAL: &str = "JR高槻駅北";

/// Paging direction for the result window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    /// One run earlier.
    Previous,
    /// One run later.
    Next,
}

/// Error from a session operation.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Malformed "HH:MM" input.
    #[error("invalid time input: {0}")]
    Time(#[from] TimeError),

    /// Malformed ISO date input.
    #[error("invalid date input {value:?}: {source}")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Paging requested before any search succeeded.
    #[error("no active search to page through")]
    NoActiveSearch,
}

/// A date/time constraint as the UI supplies it.
#[derive(Debug, Clone, Copy)]
pub struct AnchorInput<'a> {
    pub kind: AnchorKind,
    /// ISO date, e.g. "2025-06-02".
    pub date: &'a str,
    /// "HH:MM" time of day.
    pub time: &'a str,
}

/// The state paging operates on, recorded by the last successful search.
#[derive(Debug, Clone)]
struct ActiveSearch {
    departure: StopName,
    arrival: StopName,
    variant: ScheduleVariant,
    baseline: TimeOfDay,
    day: DayLabel,
    start: usize,
}

/// A stateful search session over the immutable dataset.
pub struct SearchSession {
    dataset: Arc<ScheduleDataset>,
    config: SearchConfig,
    active: Option<ActiveSearch>,
}

impl SearchSession {
    /// Create a session over a shared dataset.
    pub fn new(dataset: Arc<ScheduleDataset>, config: SearchConfig) -> Self {
        Self {
            dataset,
            config,
            active: None,
        }
    }

    /// Search for upcoming runs and make the result the active window.
    ///
    /// Without an anchor, the current local date and time apply.
    pub fn search(
        &mut self,
        departure: &str,
        arrival: &str,
        anchor: Option<AnchorInput<'_>>,
    ) -> Result<SearchOutcome, SessionError> {
        let anchor = anchor.map(parse_anchor).transpose()?;
        let query = SearchQuery {
            departure: departure.to_string(),
            arrival: arrival.to_string(),
            anchor,
        };

        let outcome = search(&self.dataset, &query, Moment::current(), &self.config)?;

        self.active = Some(ActiveSearch {
            departure: outcome.departure.clone(),
            arrival: outcome.arrival.clone(),
            variant: outcome.variant,
            baseline: outcome.baseline,
            day: outcome.window.day,
            start: outcome.window.start,
        });

        Ok(outcome)
    }

    /// Shift the active window one run and recompute it.
    ///
    /// `Next` advances the window start by one, capped so the window
    /// stays within the timetable; `Previous` moves it back by one,
    /// floored at the first run. The window is re-derived through the
    /// same selection code as the original search, never patched from
    /// cached results.
    pub fn page(&mut self, direction: PageDirection) -> Result<SearchOutcome, SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::NoActiveSearch)?;

        let segment = self
            .dataset
            .segment(&active.departure, &active.arrival, active.variant)
            .ok_or_else(|| SearchError::RouteNotFound {
                departure: active.departure.as_str().to_string(),
                arrival: active.arrival.as_str().to_string(),
            })?;

        let len = segment.departures.len();
        let start = match direction {
            PageDirection::Next => (active.start + 1).min(len.saturating_sub(self.config.window_size)),
            PageDirection::Previous => active.start.saturating_sub(1),
        };

        let window = window_at(segment, start, self.config.window_size, active.day);
        active.start = window.start;

        Ok(SearchOutcome {
            departure: active.departure.clone(),
            arrival: active.arrival.clone(),
            variant: active.variant,
            baseline: active.baseline,
            window,
        })
    }

    /// Build the full-day timetable for a stop pair.
    ///
    /// Does not touch the active search window.
    pub fn timetable(
        &self,
        departure: &str,
        arrival: &str,
        date: Option<&str>,
    ) -> Result<Vec<HourGroup>, SessionError> {
        let date = date.map(parse_iso_date).transpose()?;
        let today = Moment::current().date;
        Ok(build_timetable(
            &self.dataset,
            departure,
            arrival,
            date,
            today,
        )?)
    }
}

fn parse_anchor(input: AnchorInput<'_>) -> Result<TimeAnchor, SessionError> {
    Ok(TimeAnchor {
        kind: input.kind,
        date: parse_iso_date(input.date)?,
        time: TimeOfDay::parse(input.time)?,
    })
}

fn parse_iso_date(value: &str) -> Result<NaiveDate, SessionError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| SessionError::Date {
        value: value.to_string(),
        source,
    })
}
