//! Telemerge - reconciliation engine for overlapping workout telemetry streams
//!
//! Telemerge fuses two independent, partially-overlapping recordings of the
//! same physical workout - a host-device trackpoint document and a fitness
//! platform's per-second metric record - into one unified, gap-filled sample
//! series through a deterministic pipeline: source parsing → candidate
//! scoring → time-grid fusion.
//!
//! ## Modules
//!
//! - **Adapters**: Parse each raw source into a canonical ordered sample
//!   sequence
//! - **Scorer**: Rate how plausibly a host recording and a platform workout
//!   represent the same session
//! - **Merger**: Fuse the two canonical sequences onto one time grid with
//!   field-level source precedence and provenance
//!
//! Fetching raw recordings, searching for candidate pairs, and encoding the
//! fused series to an output file are the embedding application's concerns.

pub mod adapters;
pub mod error;
pub mod merge;
pub mod options;
pub mod pipeline;
pub mod score;
pub mod types;

pub use adapters::{HostAdapter, Metric, PlatformAdapter, PlatformWorkout, WorkoutSamples};
pub use error::ReconcileError;
pub use merge::{series_span, span_secs, SeriesMerger};
pub use options::MergeOptions;
pub use pipeline::{reconcile, Reconciler};
pub use score::MatchScorer;
pub use types::{HostSample, PlatformSample, Position, Source, UnifiedSample};
