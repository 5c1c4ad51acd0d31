//! Source adapters
//!
//! This module provides adapters that parse raw source recordings and map
//! them to canonical, time-ordered sample sequences.

mod host;
mod platform;

pub use host::HostAdapter;
pub use platform::{
    Metric, PlatformAdapter, PlatformWorkout, WorkoutSamples, METRIC_CADENCE, METRIC_HEART_RATE,
    METRIC_OUTPUT,
};
