//! Series fusion
//!
//! This module fuses a host sample sequence and a platform sample sequence
//! onto one fixed time grid, with deterministic per-field source precedence
//! and heart-rate provenance.

use crate::types::{HostSample, PlatformSample, Source, UnifiedSample};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Lookup order for one fused field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precedence {
    /// Host value when present, platform value as fallback
    HostThenPlatform,
    /// Platform value or nothing; the host source never supplies this field
    PlatformOnly,
    /// Host value or nothing; the platform source never supplies this field
    HostOnly,
}

impl Precedence {
    /// Pick the value for one field at one tick, with the source that
    /// supplied it.
    fn resolve<T>(self, host: Option<T>, platform: Option<T>) -> (Option<T>, Option<Source>) {
        match self {
            Precedence::HostThenPlatform => {
                if host.is_some() {
                    (host, Some(Source::Host))
                } else if platform.is_some() {
                    (platform, Some(Source::Platform))
                } else {
                    (None, None)
                }
            }
            Precedence::PlatformOnly => {
                let source = platform.is_some().then_some(Source::Platform);
                (platform, source)
            }
            Precedence::HostOnly => {
                let source = host.is_some().then_some(Source::Host);
                (host, source)
            }
        }
    }
}

// Field-level precedence table for the fused series
const HEART_RATE_RULE: Precedence = Precedence::HostThenPlatform;
const POWER_RULE: Precedence = Precedence::PlatformOnly;
const CADENCE_RULE: Precedence = Precedence::HostThenPlatform;
const POSITION_RULE: Precedence = Precedence::HostOnly;

/// Sample sequence merger
pub struct SeriesMerger;

impl SeriesMerger {
    /// Fuse two sample sequences onto one time grid.
    ///
    /// The grid spans from the earliest to the latest timestamp across both
    /// inputs, one tick every `resolution_secs`, endpoints inclusive. Either
    /// input may be empty; when both are, the output is empty. Samples are
    /// matched to ticks by exact timestamp only, no interpolation or
    /// nearest-neighbour snapping.
    pub fn merge(
        host: &[HostSample],
        platform: &[PlatformSample],
        resolution_secs: u32,
    ) -> Vec<UnifiedSample> {
        let times = host
            .iter()
            .map(|s| s.time)
            .chain(platform.iter().map(|s| s.time));
        let Some((start, end)) = series_span(times) else {
            return Vec::new();
        };

        // Index each input once so every tick is an O(1) lookup
        let host_at: HashMap<DateTime<Utc>, &HostSample> =
            host.iter().map(|s| (s.time, s)).collect();
        let platform_at: HashMap<DateTime<Utc>, &PlatformSample> =
            platform.iter().map(|s| (s.time, s)).collect();

        let step = Duration::seconds(i64::from(resolution_secs.max(1)));
        let mut out = Vec::new();
        let mut tick = start;

        while tick <= end {
            out.push(fuse_tick(
                tick,
                host_at.get(&tick).copied(),
                platform_at.get(&tick).copied(),
            ));
            tick = tick + step;
        }

        out
    }
}

/// Fuse whatever each source reported at one grid tick
fn fuse_tick(
    time: DateTime<Utc>,
    host: Option<&HostSample>,
    platform: Option<&PlatformSample>,
) -> UnifiedSample {
    let mut sample = UnifiedSample::empty_at(time);

    let (heart_rate, hr_source) = HEART_RATE_RULE.resolve(
        host.and_then(|h| h.heart_rate),
        platform.and_then(|p| p.heart_rate),
    );
    sample.heart_rate = heart_rate;
    sample.hr_source = hr_source;

    sample.power = POWER_RULE.resolve(None, platform.and_then(|p| p.power)).0;
    sample.cadence = CADENCE_RULE
        .resolve(
            host.and_then(|h| h.cadence),
            platform.and_then(|p| p.cadence),
        )
        .0;
    sample.position = POSITION_RULE.resolve(host.and_then(|h| h.position), None).0;

    sample
}

/// Earliest and latest timestamp across a sample sequence
pub fn series_span(
    times: impl Iterator<Item = DateTime<Utc>>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    times.fold(None, |span, t| match span {
        None => Some((t, t)),
        Some((start, end)) => Some((start.min(t), end.max(t))),
    })
}

/// Elapsed seconds between the earliest and latest timestamp, 0 for an
/// empty sequence
pub fn span_secs(times: impl Iterator<Item = DateTime<Utc>>) -> f64 {
    series_span(times)
        .map(|(start, end)| (end - start).num_milliseconds() as f64 / 1000.0)
        .unwrap_or(0.0)
}
