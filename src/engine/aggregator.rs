//! Per-segment reduction
//!
//! Collapses each run of records sharing (aircraft, flight, segment) into a
//! single summary carrying the time span, the ordered path, and the geometric
//! metrics.

use tracing::debug;

use super::metrics::{irregularity, total_turning_deg};
use super::types::{minutes_f64, PathPoint, SegmentSummary, SegmentedRecord};

/// Reduce segmented records into one summary per (aircraft, flight, segment)
/// group.
///
/// Expects each group's records to be contiguous and chronological, which is
/// what the segmenter emits. Null coordinates are kept in the path; the
/// metrics filter them internally.
pub fn summarize(records: &[SegmentedRecord]) -> Vec<SegmentSummary> {
    let mut summaries = Vec::new();
    let mut run_start = 0;

    for i in 1..=records.len() {
        let boundary = i == records.len() || {
            let (a, b) = (&records[i - 1], &records[i]);
            a.record.group_key() != b.record.group_key()
                || a.segment_index != b.segment_index
        };
        if boundary {
            summaries.push(reduce_run(&records[run_start..i]));
            run_start = i;
        }
    }

    debug!("Reduced {} records into {} segment summaries", records.len(), summaries.len());
    summaries
}

/// Reduce one non-empty contiguous run of same-segment records
fn reduce_run(run: &[SegmentedRecord]) -> SegmentSummary {
    let first = &run[0];
    let last = &run[run.len() - 1];

    let duration = last.record.timestamp.signed_duration_since(first.record.timestamp);
    let path: Vec<PathPoint> = run
        .iter()
        .map(|r| PathPoint {
            latitude: r.record.latitude,
            longitude: r.record.longitude,
        })
        .collect();

    SegmentSummary {
        aircraft_id: first.record.aircraft_id.clone(),
        flight_id: first.record.flight_id.clone(),
        segment_index: first.segment_index,
        start_time: first.record.timestamp,
        end_time: last.record.timestamp,
        duration_min: minutes_f64(duration),
        irregularity: irregularity(&path),
        total_turning_deg: total_turning_deg(&path),
        path,
    }
}
