//! Error types for the engine and the ingestion boundary

use thiserror::Error;

/// Errors raised by the segmentation/metrics engine.
///
/// Degenerate geometry (null coordinates, single-point segments, zero-length
/// paths) is deliberately not an error; those cases resolve to neutral metric
/// values instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A precondition violation in the input batch. The engine fails fast and
    /// never attempts repair or silent sorting.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Errors raised while loading a position batch, outside the engine core
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid position report on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("position report on line {line} has no timestamp")]
    MissingTimestamp { line: usize },

    /// Distinct "no data available" condition for the requested period,
    /// rather than a generic failure
    #[error("no position reports available")]
    NoData,
}
