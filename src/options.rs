//! Reconciliation options
//!
//! An immutable configuration value grouping the caller-supplied knobs of
//! the engine. There is no ambient or global configuration; every component
//! also accepts these values as explicit parameters.

use serde::{Deserialize, Serialize};

/// Caller-supplied tuning for matching and fusion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Widest start-time gap, in seconds, that still counts toward a match
    pub match_time_window_secs: f64,
    /// Duration mismatch tolerance as a fraction of the platform duration
    pub match_duration_diff_pct: f64,
    /// Output grid step in seconds
    pub resolution_secs: u32,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            match_time_window_secs: 300.0,
            match_duration_diff_pct: 0.15,
            resolution_secs: 1,
        }
    }
}
