//! Configuration loaded from environment variables

use crate::engine::DEFAULT_MAX_GAP_MIN;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Segmentation threshold: a gap over this many minutes starts a new leg
    pub max_gap_min: f64,

    /// Input file path; None reads from stdin
    pub input_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            max_gap_min: std::env::var("MAX_GAP_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_GAP_MIN),

            input_path: std::env::var("INPUT_PATH").ok(),
        }
    }
}
