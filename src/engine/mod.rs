//! Trajectory segmentation and geometric metrics engine
//!
//! Pure, synchronous batch computation:
//! 1. Partition the batch into aircraft/flight groups
//! 2. Split each group into segments at time gaps over the threshold
//! 3. Reduce each segment to a summary (time span, path)
//! 4. Attach great-circle path metrics (irregularity, total turning)

pub mod geo;
pub mod metrics;
mod aggregator;
mod segmenter;
mod types;

pub use aggregator::summarize;
pub use segmenter::{segment_batch, segment_group, DEFAULT_MAX_GAP_MIN};
pub use types::{PathPoint, PositionRecord, SegmentSummary, SegmentedRecord};

use crate::error::EngineError;

/// Run the full pipeline over a position batch.
///
/// The batch must be chronologically sorted within each aircraft/flight
/// group; `max_gap_min` is the segmentation threshold in minutes.
pub fn run(
    batch: Vec<PositionRecord>,
    max_gap_min: f64,
) -> Result<Vec<SegmentSummary>, EngineError> {
    let segmented = segment_batch(batch, max_gap_min)?;
    Ok(summarize(&segmented))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn report(
        aircraft: &str,
        flight: &str,
        offset_min: i64,
        lat: f64,
        lon: f64,
    ) -> PositionRecord {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        PositionRecord {
            aircraft_id: aircraft.to_string(),
            flight_id: flight.to_string(),
            timestamp: base + Duration::minutes(offset_min),
            latitude: Some(lat),
            longitude: Some(lon),
        }
    }

    #[test]
    fn test_end_to_end_two_segments() {
        // Four reports at T+0, T+3, T+4, T+20 on a straight northeast line;
        // the 16 minute gap splits the last report into its own segment
        let batch = vec![
            report("ABC123", "XY1", 0, 0.0, 0.0),
            report("ABC123", "XY1", 3, 0.1, 0.1),
            report("ABC123", "XY1", 4, 0.2, 0.2),
            report("ABC123", "XY1", 20, 0.3, 0.3),
        ];
        let summaries = run(batch, 10.0).unwrap();
        assert_eq!(summaries.len(), 2);

        let s0 = &summaries[0];
        assert_eq!(s0.aircraft_id, "ABC123");
        assert_eq!(s0.flight_id, "XY1");
        assert_eq!(s0.segment_index, 0);
        assert_eq!(s0.path.len(), 3);
        assert!((s0.duration_min - 4.0).abs() < 1e-9);
        assert!(s0.irregularity.abs() < 1e-3);

        let s1 = &summaries[1];
        assert_eq!(s1.segment_index, 1);
        assert_eq!(s1.path.len(), 1);
        assert_eq!(s1.duration_min, 0.0);
        assert_eq!(s1.irregularity, 0.0);
        assert_eq!(s1.total_turning_deg, 0.0);
    }

    #[test]
    fn test_unsorted_batch_fails_fast() {
        let batch = vec![
            report("ABC123", "XY1", 5, 0.0, 0.0),
            report("ABC123", "XY1", 0, 0.1, 0.1),
        ];
        assert!(run(batch, 10.0).is_err());
    }
}
