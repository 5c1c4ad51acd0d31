//! Candidate match scoring
//!
//! A stateless comparison primitive: given the start time and duration of a
//! platform workout and of one host-device candidate recording, produce a
//! confidence score in [0, 1] that the two represent the same session. The
//! surrounding search over candidates lives with the caller.

use chrono::{DateTime, Utc};

/// Weight of the start-time agreement in the final score
const TIME_WEIGHT: f64 = 0.6;
/// Weight of the duration agreement in the final score
const DURATION_WEIGHT: f64 = 0.4;
/// Duration sub-score drops to 0.75 at the configured tolerance and keeps
/// falling linearly past it
const DURATION_SOFTNESS: f64 = 0.25;

/// Recording pair scorer
pub struct MatchScorer;

impl MatchScorer {
    /// Score one candidate pairing of a platform workout and a host recording.
    ///
    /// The start-time gap dominates: a close start with a mismatched duration
    /// outscores a distant start with a matching duration. Degenerate inputs
    /// (zero platform duration, non-positive window or tolerance) contribute
    /// the maximal-mismatch sub-score of 0 instead of failing.
    pub fn score(
        platform_start: DateTime<Utc>,
        host_start: DateTime<Utc>,
        platform_duration_secs: f64,
        host_duration_secs: f64,
        time_window_secs: f64,
        duration_diff_pct: f64,
    ) -> f64 {
        let time = time_subscore(platform_start, host_start, time_window_secs);
        let duration =
            duration_subscore(platform_duration_secs, host_duration_secs, duration_diff_pct);

        (TIME_WEIGHT * time + DURATION_WEIGHT * duration).clamp(0.0, 1.0)
    }
}

/// 1.0 for identical start times, 0 once the gap reaches the window
fn time_subscore(
    platform_start: DateTime<Utc>,
    host_start: DateTime<Utc>,
    window_secs: f64,
) -> f64 {
    if window_secs <= 0.0 {
        return 0.0;
    }

    let gap_secs = (host_start - platform_start).num_milliseconds().abs() as f64 / 1000.0;
    (1.0 - gap_secs / window_secs).max(0.0)
}

/// 1.0 for identical durations, 0.75 exactly at the tolerance, 0 once the
/// mismatch reaches four times the tolerance
fn duration_subscore(platform_secs: f64, host_secs: f64, tolerance_pct: f64) -> f64 {
    if platform_secs <= 0.0 || tolerance_pct <= 0.0 {
        return 0.0;
    }

    let diff_pct = (host_secs - platform_secs).abs() / platform_secs;
    (1.0 - DURATION_SOFTNESS * diff_pct / tolerance_pct).max(0.0)
}
