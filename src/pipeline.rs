//! Pipeline orchestration
//!
//! This module composes the pure stages into the public reconciliation API:
//! source parsing → series fusion. Fetching the raw recordings, searching
//! for candidate pairs, and writing the fused output stay with the caller.

use crate::adapters::{HostAdapter, PlatformAdapter, PlatformWorkout};
use crate::merge::SeriesMerger;
use crate::options::MergeOptions;
use crate::score::MatchScorer;
use crate::types::UnifiedSample;
use chrono::{DateTime, Utc};

/// Reconcile one matched pair of recordings into a unified sample series.
///
/// Either input may be absent; an absent or malformed host document degrades
/// to a platform-only series (and the reverse), never an error.
///
/// # Example
/// ```ignore
/// let unified = reconcile(Some(&tcx_xml), Some(&workout), &MergeOptions::default());
/// ```
pub fn reconcile(
    host_document: Option<&str>,
    workout: Option<&PlatformWorkout>,
    options: &MergeOptions,
) -> Vec<UnifiedSample> {
    let host_series = host_document
        .map(HostAdapter::parse_lenient)
        .unwrap_or_default();
    let platform_series = workout.map(PlatformAdapter::parse).unwrap_or_default();

    log::debug!(
        "reconciling {} host samples with {} platform samples at {}s resolution",
        host_series.len(),
        platform_series.len(),
        options.resolution_secs
    );

    SeriesMerger::merge(&host_series, &platform_series, options.resolution_secs)
}

/// Reconciliation engine bound to one immutable set of options.
///
/// A convenience wrapper for callers that score candidates and fuse series
/// with the same tuning across many workouts.
#[derive(Debug, Clone)]
pub struct Reconciler {
    options: MergeOptions,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(MergeOptions::default())
    }
}

impl Reconciler {
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Score one candidate pairing with this engine's tuning.
    pub fn score_candidate(
        &self,
        platform_start: DateTime<Utc>,
        host_start: DateTime<Utc>,
        platform_duration_secs: f64,
        host_duration_secs: f64,
    ) -> f64 {
        MatchScorer::score(
            platform_start,
            host_start,
            platform_duration_secs,
            host_duration_secs,
            self.options.match_time_window_secs,
            self.options.match_duration_diff_pct,
        )
    }

    /// Reconcile one matched pair of recordings with this engine's tuning.
    pub fn reconcile(
        &self,
        host_document: Option<&str>,
        workout: Option<&PlatformWorkout>,
    ) -> Vec<UnifiedSample> {
        reconcile(host_document, workout, &self.options)
    }
}
