//! Core types for the Telemerge reconciliation engine
//!
//! This module defines the sample values that flow through the engine: host
//! device samples, platform samples, and the fused output samples with
//! per-field provenance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Telemetry source identifier for provenance tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Host,
    Platform,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Host => "host",
            Source::Platform => "platform",
        }
    }
}

/// GPS position in decimal degrees.
///
/// Latitude and longitude always travel together; a sample either has a full
/// position or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// One timestamped sample parsed from a host-device trackpoint document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostSample {
    /// Absolute sample time (UTC)
    pub time: DateTime<Utc>,
    /// Heart rate (bpm)
    pub heart_rate: Option<u16>,
    /// Cadence (rpm)
    pub cadence: Option<u16>,
    /// GPS position, when the trackpoint carried both coordinates
    pub position: Option<Position>,
}

/// One per-second sample derived from a platform workout record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSample {
    /// Absolute sample time: workout start + elapsed seconds (UTC)
    pub time: DateTime<Utc>,
    /// Heart rate (bpm)
    pub heart_rate: Option<u16>,
    /// Power output (watts)
    pub power: Option<f64>,
    /// Cadence (rpm)
    pub cadence: Option<u16>,
}

/// One fused output sample on the reconciled time grid.
///
/// Power is only ever populated from the platform source and position only
/// ever from the host source; heart rate and cadence prefer the host value
/// and fall back to the platform value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnifiedSample {
    /// Grid tick time (UTC)
    pub time: DateTime<Utc>,
    /// Heart rate (bpm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u16>,
    /// Which source supplied the heart rate, when one did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_source: Option<Source>,
    /// Power output (watts), platform-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    /// Cadence (rpm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<u16>,
    /// GPS position, host-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl UnifiedSample {
    /// An output tick with every field absent
    pub fn empty_at(time: DateTime<Utc>) -> Self {
        Self {
            time,
            heart_rate: None,
            hr_source: None,
            power: None,
            cadence: None,
            position: None,
        }
    }
}
