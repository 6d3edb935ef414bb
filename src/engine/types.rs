//! Engine data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fractional minutes in a duration, keeping sub-millisecond precision.
/// Microsecond overflow only occurs past ~292k years, where the millisecond
/// fallback is exact enough.
pub(crate) fn minutes_f64(d: chrono::Duration) -> f64 {
    match d.num_microseconds() {
        Some(us) => us as f64 / 60_000_000.0,
        None => d.num_milliseconds() as f64 / 60_000.0,
    }
}

/// One observed position report for an aircraft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Opaque aircraft identifier (typically the hex transponder code)
    pub aircraft_id: String,

    /// Flight identifier / callsign, may be empty when unknown
    #[serde(default)]
    pub flight_id: String,

    /// Report time (UTC)
    pub timestamp: DateTime<Utc>,

    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: Option<f64>,
}

impl PositionRecord {
    /// Grouping key: gaps are compared only within one aircraft/flight pair
    pub fn group_key(&self) -> (&str, &str) {
        (self.aircraft_id.as_str(), self.flight_id.as_str())
    }
}

/// One point of a segment path. Either coordinate may be missing when the
/// upstream report carried no position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PathPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude: Some(latitude), longitude: Some(longitude) }
    }

    /// Both coordinates present
    pub fn valid(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// A position report annotated with its segment assignment
#[derive(Debug, Clone, Serialize)]
pub struct SegmentedRecord {
    /// The original report
    pub record: PositionRecord,

    /// Minutes since the previous report in the same aircraft/flight group,
    /// 0.0 for the first report of a group
    pub time_gap_min: f64,

    /// Segment number within the group, starting at 0, incremented whenever
    /// the gap to the previous report exceeds the configured threshold
    pub segment_index: u32,
}

/// The reduction of all records sharing (aircraft, flight, segment)
#[derive(Debug, Clone, Serialize)]
pub struct SegmentSummary {
    pub aircraft_id: String,
    pub flight_id: String,
    pub segment_index: u32,

    /// Timestamp of the first report in the segment
    pub start_time: DateTime<Utc>,

    /// Timestamp of the last report in the segment
    pub end_time: DateTime<Utc>,

    /// Elapsed time end - start, in minutes
    pub duration_min: f64,

    /// Chronological path, null coordinates preserved
    pub path: Vec<PathPoint>,

    /// Detour index 1 - direct/total over the valid path points, in [0, 1)
    pub irregularity: f64,

    /// Sum of absolute per-leg bearing changes, degrees
    pub total_turning_deg: f64,
}
