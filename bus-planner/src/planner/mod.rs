//! Schedule resolution engine.
//!
//! This module implements the core query logic: given a stop pair, a
//! calendar date and a time anchor, determine the applicable schedule
//! variant, locate the relevant slice of scheduled runs, and derive
//! arrival times, fares and congestion estimates.
//!
//! Everything here is pure: queries take the dataset and a wall-clock
//! snapshot as arguments and hold no state between calls. The paging
//! state the UI needs lives in [`crate::session`].

mod anchor;
mod config;
mod search;
mod select;
mod timetable;

pub use anchor::{AnchorKind, Moment, TimeAnchor, effective_date, resolve_baseline};
pub use config::SearchConfig;
pub use search::{SearchError, SearchOutcome, SearchQuery, search};
pub use select::{DayLabel, RunResult, RunWindow, first_at_or_after, select_runs, window_at};
pub use timetable::{HourGroup, TimetableEntry, build_timetable};
