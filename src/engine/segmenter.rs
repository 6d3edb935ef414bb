//! Gap-based trajectory segmentation
//!
//! Splits the chronological position stream of one aircraft/flight group into
//! segments wherever the gap between consecutive reports exceeds a threshold.
//! Groups are fully independent: a gap is never measured across different
//! aircraft or flight identifiers, even when their timestamps interleave.

use std::collections::HashMap;
use tracing::debug;

use crate::error::EngineError;

use super::types::{minutes_f64, PositionRecord, SegmentedRecord};

/// Default segmentation threshold in minutes
pub const DEFAULT_MAX_GAP_MIN: f64 = 10.0;

/// Annotate one sorted aircraft/flight group with time gaps and segment
/// indices.
///
/// The gap to the previous report is expressed in fractional minutes; the
/// segment index starts at 0 and increments whenever the gap is strictly
/// greater than `max_gap_min`. A gap exactly equal to the threshold does not
/// start a new segment.
///
/// Input must be sorted ascending by timestamp; an out-of-order record is a
/// precondition violation reported as `MalformedInput`.
pub fn segment_group(
    records: Vec<PositionRecord>,
    max_gap_min: f64,
) -> Result<Vec<SegmentedRecord>, EngineError> {
    let mut out = Vec::with_capacity(records.len());

    // Accumulator local to this group's sequential pass
    let mut prev_timestamp = None;
    let mut segment_index: u32 = 0;

    for record in records {
        let time_gap_min = match prev_timestamp {
            None => 0.0,
            Some(prev) => {
                let gap = record.timestamp.signed_duration_since(prev);
                if gap < chrono::Duration::zero() {
                    return Err(EngineError::MalformedInput(format!(
                        "group ({}, {}) not sorted: {} precedes {}",
                        record.aircraft_id, record.flight_id, record.timestamp, prev
                    )));
                }
                let gap_min = minutes_f64(gap);
                if gap_min > max_gap_min {
                    segment_index += 1;
                }
                gap_min
            }
        };

        prev_timestamp = Some(record.timestamp);
        out.push(SegmentedRecord { record, time_gap_min, segment_index });
    }

    Ok(out)
}

/// Segment a whole batch: partition it into aircraft/flight groups (arrival
/// order of groups preserved) and segment each group independently.
///
/// Records of a group stay contiguous and chronological in the output; no
/// ordering across groups is promised.
pub fn segment_batch(
    batch: Vec<PositionRecord>,
    max_gap_min: f64,
) -> Result<Vec<SegmentedRecord>, EngineError> {
    let mut groups: HashMap<(String, String), Vec<PositionRecord>> = HashMap::new();
    let mut group_order: Vec<(String, String)> = Vec::new();

    for record in batch {
        let key = (record.aircraft_id.clone(), record.flight_id.clone());
        groups.entry(key.clone()).or_insert_with(|| {
            group_order.push(key);
            Vec::new()
        }).push(record);
    }

    debug!("Segmenting {} aircraft/flight groups", group_order.len());

    let mut out = Vec::new();
    for key in group_order {
        let records = groups.remove(&key).unwrap_or_default();
        let mut segmented = segment_group(records, max_gap_min)?;
        if let Some(last) = segmented.last() {
            debug!(
                "Group ({}, {}): {} records in {} segments",
                key.0,
                key.1,
                segmented.len(),
                last.segment_index + 1
            );
        }
        out.append(&mut segmented);
    }

    Ok(out)
}
