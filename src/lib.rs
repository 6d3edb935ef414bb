//! Flight leg segmentation and path-irregularity metrics for aircraft
//! position reports.
//!
//! The engine splits each aircraft/flight's chronological position stream
//! into legs at time gaps, reduces every leg to a summary, and scores it
//! with great-circle geometry: a detour index in [0, 1) for anomaly
//! detection plus cumulative turning as a secondary curvature measure.

pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;

pub use engine::{run, PathPoint, PositionRecord, SegmentSummary, SegmentedRecord};
pub use error::{EngineError, IngestError};
