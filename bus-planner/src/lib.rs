//! Bus route search and timetable engine.
//!
//! A schedule resolution library that answers: "from this stop to that
//! stop, when are the next buses, what do they cost, and how crowded
//! will they be?" A secondary mode produces a full-day timetable
//! grouped by hour.
//!
//! The engine is pure: every query is a function of the immutable
//! [`dataset::ScheduleDataset`] and the query inputs. The one stateful
//! piece — the "current result window" that paging operates on — lives
//! in [`session::SearchSession`], owned by the caller.

pub mod dataset;
pub mod domain;
pub mod planner;
pub mod session;
