//! Domain types for the bus schedule engine.
//!
//! This module contains the core domain model types that represent
//! validated schedule data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod congestion;
mod stop;
mod time;
mod variant;

pub use congestion::Congestion;
pub use stop::StopName;
pub use time::{TimeError, TimeOfDay};
pub use variant::ScheduleVariant;
