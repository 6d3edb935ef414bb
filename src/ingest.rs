//! Position batch loading
//!
//! Reads newline-delimited JSON position reports and prepares them for the
//! engine: reports without a usable timestamp are rejected, then the batch is
//! sorted by (aircraft_id, timestamp). Sorting happens here, never inside the
//! engine.

use std::cmp::Ordering;
use std::io::BufRead;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::engine::PositionRecord;
use crate::error::IngestError;

/// Raw report as it appears on the wire; the timestamp may be absent
#[derive(Debug, Deserialize)]
struct RawReport {
    aircraft_id: String,
    #[serde(default)]
    flight_id: String,
    timestamp: Option<DateTime<Utc>>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Read a batch of position reports from newline-delimited JSON.
///
/// Blank lines are skipped. An empty batch is reported as the distinct
/// `NoData` condition. The returned batch is sorted by (aircraft_id,
/// timestamp), ready for segmentation.
pub fn read_batch<R: BufRead>(reader: R) -> Result<Vec<PositionRecord>, IngestError> {
    let mut batch = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let raw: RawReport = serde_json::from_str(&line)
            .map_err(|source| IngestError::Json { line: line_no, source })?;
        let timestamp = raw
            .timestamp
            .ok_or(IngestError::MissingTimestamp { line: line_no })?;

        batch.push(PositionRecord {
            aircraft_id: raw.aircraft_id,
            flight_id: raw.flight_id,
            timestamp,
            latitude: raw.latitude,
            longitude: raw.longitude,
        });
    }

    if batch.is_empty() {
        return Err(IngestError::NoData);
    }

    sort_batch(&mut batch);
    debug!("Loaded {} position reports", batch.len());
    Ok(batch)
}

/// Sort a batch by (aircraft_id, timestamp). Stable, so equal keys keep
/// their arrival order.
pub fn sort_batch(batch: &mut [PositionRecord]) {
    batch.sort_by(|a, b| match a.aircraft_id.cmp(&b.aircraft_id) {
        Ordering::Equal => a.timestamp.cmp(&b.timestamp),
        other => other,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_batch_sorts_by_aircraft_and_time() {
        let input = r#"{"aircraft_id":"B","flight_id":"F2","timestamp":"2024-03-01T12:00:00Z","latitude":1.0,"longitude":2.0}
{"aircraft_id":"A","flight_id":"F1","timestamp":"2024-03-01T12:05:00Z","latitude":3.0,"longitude":4.0}

{"aircraft_id":"A","flight_id":"F1","timestamp":"2024-03-01T12:01:00Z","latitude":5.0,"longitude":6.0}
"#;
        let batch = read_batch(Cursor::new(input)).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].aircraft_id, "A");
        assert!(batch[0].timestamp < batch[1].timestamp);
        assert_eq!(batch[2].aircraft_id, "B");
    }

    #[test]
    fn test_missing_coordinates_are_kept() {
        let input = r#"{"aircraft_id":"A","timestamp":"2024-03-01T12:00:00Z","latitude":null,"longitude":null}"#;
        let batch = read_batch(Cursor::new(input)).unwrap();
        assert_eq!(batch[0].flight_id, "");
        assert!(batch[0].latitude.is_none());
    }

    #[test]
    fn test_missing_timestamp_rejected() {
        let input = r#"{"aircraft_id":"A","flight_id":"F1","timestamp":null,"latitude":1.0,"longitude":2.0}"#;
        let err = read_batch(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, IngestError::MissingTimestamp { line: 1 }));
    }

    #[test]
    fn test_empty_input_is_no_data() {
        let err = read_batch(Cursor::new("\n\n")).unwrap_err();
        assert!(matches!(err, IngestError::NoData));
    }

    #[test]
    fn test_bad_json_reports_line() {
        let input = "{\"aircraft_id\":\"A\",\"timestamp\":\"2024-03-01T12:00:00Z\"}\nnot json\n";
        let err = read_batch(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, IngestError::Json { line: 2, .. }));
    }
}
