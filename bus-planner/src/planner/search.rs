//! Run search entry point.
//!
//! Resolves a stop pair, a calendar date and an optional time anchor
//! into an annotated window of upcoming runs: canonicalize the stop
//! names, classify the date into a schedule variant, look up the
//! segment, resolve the baseline, select the window.

use tracing::debug;

use crate::dataset::ScheduleDataset;
use crate::domain::{ScheduleVariant, StopName, TimeOfDay};

use super::anchor::{Moment, TimeAnchor, effective_date, resolve_baseline};
use super::config::SearchConfig;
use super::select::{RunWindow, select_runs};

/// Error from run search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The (stop pair, variant) combination is absent from the dataset.
    /// A user-visible condition, not a fault.
    #[error("no route found from {departure} to {arrival}")]
    RouteNotFound { departure: String, arrival: String },
}

/// A run search request.
///
/// Stop names are raw user input; the search canonicalizes them before
/// any dataset lookup.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub departure: String,
    pub arrival: String,
    pub anchor: Option<TimeAnchor>,
}

/// The resolved result of a search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Canonical departure stop.
    pub departure: StopName,
    /// Canonical arrival stop.
    pub arrival: StopName,
    /// The schedule variant that applied to the queried date.
    pub variant: ScheduleVariant,
    /// The baseline departure time the window was anchored to.
    pub baseline: TimeOfDay,
    /// The annotated run window.
    pub window: RunWindow,
}

/// Search for the next runs between two stops.
///
/// `now` is the caller's wall-clock snapshot; it supplies the date and
/// baseline time only when the query has no anchor. The search itself
/// is a pure function of `(dataset, query, now, config)`.
pub fn search(
    dataset: &ScheduleDataset,
    query: &SearchQuery,
    now: Moment,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    let departure = StopName::canonicalize(&query.departure);
    let arrival = StopName::canonicalize(&query.arrival);

    let date = effective_date(query.anchor.as_ref(), now);
    let variant = ScheduleVariant::for_date(date);

    let segment = dataset
        .segment(&departure, &arrival, variant)
        .ok_or_else(|| SearchError::RouteNotFound {
            departure: query.departure.clone(),
            arrival: query.arrival.clone(),
        })?;

    let baseline = resolve_baseline(query.anchor.as_ref(), segment.duration_minutes, now);
    let window = select_runs(segment, baseline, config.window_size, 0);

    debug!(
        departure = %departure,
        arrival = %arrival,
        variant = variant.as_key(),
        %baseline,
        day = ?window.day,
        start = window.start,
        runs = window.runs.len(),
        "search resolved"
    );

    Ok(SearchOutcome {
        departure,
        arrival,
        variant,
        baseline,
        window,
    })
}
