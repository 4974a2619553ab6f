//! Static schedule dataset.
//!
//! The operator publishes three parallel tables, each keyed
//! stop → stop → schedule variant: run duration in minutes, fare in
//! yen, and the ordered list of departure times. The raw JSON shape is
//! mirrored by DTO types here and converted once, at load, into a
//! validated [`ScheduleDataset`]; queries never touch untyped JSON.
//!
//! The dataset is immutable after loading. A segment (stop pair plus
//! variant) is only queryable when it appears in all three tables with
//! a non-empty timetable; anything else is "route not found" at query
//! time.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{ScheduleVariant, StopName, TimeError, TimeOfDay};

/// Bundled copies of the operator's three published tables.
const BUNDLED_DURATIONS: &str = include_str!("../../data/bus-duration.json");
const BUNDLED_PRICES: &str = include_str!("../../data/price-list.json");
const BUNDLED_SCHEDULES: &str = include_str!("../../data/time-schedule.json");

/// Error loading or validating the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// One of the three tables failed to parse as JSON.
    #[error("failed to parse {table} table: {source}")]
    Json {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A timetable entry is not a valid "HH:MM" time.
    #[error("invalid departure time {value:?} for {departure} → {arrival} ({variant}): {source}")]
    InvalidTime {
        departure: String,
        arrival: String,
        variant: &'static str,
        value: String,
        #[source]
        source: TimeError,
    },

    /// A timetable is not in non-decreasing time order.
    #[error("timetable for {departure} → {arrival} ({variant}) is not sorted at entry {index}")]
    UnsortedTimetable {
        departure: String,
        arrival: String,
        variant: &'static str,
        index: usize,
    },
}

/// Stop → stop → variant nesting shared by all three raw tables.
type NestedTable<T> = HashMap<String, HashMap<String, HashMap<ScheduleVariant, T>>>;

/// Raw shape of the bus-duration table.
#[derive(Debug, Deserialize)]
struct DurationFile {
    bus_duration: NestedTable<u32>,
}

/// Raw shape of the price-list table.
#[derive(Debug, Deserialize)]
struct PriceFile {
    price_list: NestedTable<u32>,
}

/// Raw shape of the time-schedule table.
#[derive(Debug, Deserialize)]
struct ScheduleFile {
    time_schedules: NestedTable<Vec<String>>,
}

/// The scalar and timetable data for one (stop pair, variant) row.
#[derive(Debug, Clone)]
struct SegmentRecord {
    duration_minutes: u32,
    fare: u32,
    departures: Vec<TimeOfDay>,
}

/// A borrowed view of one dataset row.
///
/// Duration and fare are scalars for the whole segment: every run of a
/// segment takes the same time and costs the same fare.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    /// Run duration in minutes.
    pub duration_minutes: u32,
    /// Fare in yen.
    pub fare: u32,
    /// Scheduled departures, non-decreasing, one operating day.
    pub departures: &'a [TimeOfDay],
}

/// The immutable, validated schedule dataset.
///
/// Loaded once at startup; all engine queries borrow from it. Safe to
/// share across threads without synchronization.
#[derive(Debug)]
pub struct ScheduleDataset {
    segments: HashMap<String, HashMap<String, HashMap<ScheduleVariant, SegmentRecord>>>,
    segment_count: usize,
}

impl ScheduleDataset {
    /// Load the dataset bundled with the crate.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_DURATIONS, BUNDLED_PRICES, BUNDLED_SCHEDULES)
    }

    /// Build a dataset from the three raw JSON tables.
    ///
    /// Every timetable entry must parse as "HH:MM" and every timetable
    /// must be non-decreasing; violations fail the load rather than
    /// surfacing later as query-time surprises. Rows missing from the
    /// duration or price table, or with an empty timetable, are skipped
    /// with a warning — those segments simply do not exist.
    pub fn from_json(
        durations: &str,
        prices: &str,
        schedules: &str,
    ) -> Result<Self, DatasetError> {
        let durations: DurationFile =
            serde_json::from_str(durations).map_err(|source| DatasetError::Json {
                table: "bus-duration",
                source,
            })?;
        let prices: PriceFile =
            serde_json::from_str(prices).map_err(|source| DatasetError::Json {
                table: "price-list",
                source,
            })?;
        let schedules: ScheduleFile =
            serde_json::from_str(schedules).map_err(|source| DatasetError::Json {
                table: "time-schedule",
                source,
            })?;

        Self::build(
            durations.bus_duration,
            prices.price_list,
            schedules.time_schedules,
        )
    }

    fn build(
        durations: NestedTable<u32>,
        prices: NestedTable<u32>,
        schedules: NestedTable<Vec<String>>,
    ) -> Result<Self, DatasetError> {
        let mut segments: HashMap<
            String,
            HashMap<String, HashMap<ScheduleVariant, SegmentRecord>>,
        > = HashMap::new();
        let mut segment_count = 0;

        for (departure, by_arrival) in schedules {
            for (arrival, by_variant) in by_arrival {
                for (variant, raw_times) in by_variant {
                    if raw_times.is_empty() {
                        warn!(
                            %departure,
                            %arrival,
                            variant = variant.as_key(),
                            "skipping segment with empty timetable"
                        );
                        continue;
                    }

                    let duration_minutes = durations
                        .get(&departure)
                        .and_then(|m| m.get(&arrival))
                        .and_then(|m| m.get(&variant))
                        .copied();
                    let fare = prices
                        .get(&departure)
                        .and_then(|m| m.get(&arrival))
                        .and_then(|m| m.get(&variant))
                        .copied();

                    let (Some(duration_minutes), Some(fare)) = (duration_minutes, fare) else {
                        warn!(
                            %departure,
                            %arrival,
                            variant = variant.as_key(),
                            "skipping segment missing duration or fare"
                        );
                        continue;
                    };

                    let departures =
                        parse_timetable(&departure, &arrival, variant, &raw_times)?;

                    segments
                        .entry(departure.clone())
                        .or_default()
                        .entry(arrival.clone())
                        .or_default()
                        .insert(
                            variant,
                            SegmentRecord {
                                duration_minutes,
                                fare,
                                departures,
                            },
                        );
                    segment_count += 1;
                }
            }
        }

        info!(segment_count, "schedule dataset loaded");

        Ok(Self {
            segments,
            segment_count,
        })
    }

    /// Look up one dataset row.
    ///
    /// Stop names must already be canonical ([`StopName`] guarantees
    /// that). Returns `None` when the (stop pair, variant) combination
    /// is absent — absence is an expected condition, not a bug.
    pub fn segment(
        &self,
        departure: &StopName,
        arrival: &StopName,
        variant: ScheduleVariant,
    ) -> Option<Segment<'_>> {
        let record = self
            .segments
            .get(departure.as_str())?
            .get(arrival.as_str())?
            .get(&variant)?;
        Some(Segment {
            duration_minutes: record.duration_minutes,
            fare: record.fare,
            departures: &record.departures,
        })
    }

    /// Number of loaded (stop pair, variant) rows.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }
}

/// Parse and validate one raw timetable.
fn parse_timetable(
    departure: &str,
    arrival: &str,
    variant: ScheduleVariant,
    raw_times: &[String],
) -> Result<Vec<TimeOfDay>, DatasetError> {
    let mut departures = Vec::with_capacity(raw_times.len());
    for raw in raw_times {
        let time = TimeOfDay::parse(raw).map_err(|source| DatasetError::InvalidTime {
            departure: departure.to_string(),
            arrival: arrival.to_string(),
            variant: variant.as_key(),
            value: raw.clone(),
            source,
        })?;
        departures.push(time);
    }

    // One operating day, non-decreasing; the run selector's binary
    // search depends on this.
    for (index, pair) in departures.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(DatasetError::UnsortedTimetable {
                departure: departure.to_string(),
                arrival: arrival.to_string(),
                variant: variant.as_key(),
                index: index + 1,
            });
        }
    }

    Ok(departures)
}
