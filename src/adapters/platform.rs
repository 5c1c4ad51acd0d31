//! Platform workout adapter
//!
//! Maps a fitness platform workout record (start timestamp plus named
//! per-second metric arrays) to an ordered sequence of canonical platform
//! samples.

use crate::error::ReconcileError;
use crate::types::PlatformSample;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Metric slug carrying heart rate (bpm)
pub const METRIC_HEART_RATE: &str = "heart_rate";
/// Metric slug carrying power output (watts)
pub const METRIC_OUTPUT: &str = "output";
/// Metric slug carrying cadence (rpm)
pub const METRIC_CADENCE: &str = "cadence";

/// Platform workout record as delivered by the fetch collaborator.
///
/// Reduced to the fields the reconciliation engine reads; everything else in
/// the platform's response is irrelevant here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformWorkout {
    /// Workout start/creation timestamp (UTC), the anchor for every sample
    pub start_time: DateTime<Utc>,
    /// Per-second samples container; absent when the platform reported none
    #[serde(default)]
    pub samples: Option<WorkoutSamples>,
}

/// Per-second metric container of a platform workout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutSamples {
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

/// One named metric with a value array indexed by elapsed second.
///
/// Values arrive as raw JSON: numbers, numeric strings, or nulls for seconds
/// the platform lost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub slug: String,
    #[serde(default)]
    pub values: Vec<serde_json::Value>,
}

/// Workout record adapter
pub struct PlatformAdapter;

impl PlatformAdapter {
    /// Parse a raw workout JSON payload into an ordered sample sequence.
    pub fn parse_json(raw_json: &str) -> Result<Vec<PlatformSample>, ReconcileError> {
        let workout: PlatformWorkout = serde_json::from_str(raw_json)?;
        Ok(Self::parse(&workout))
    }

    /// Parse a workout record into an ordered sample sequence.
    ///
    /// One sample per elapsed second across the recognized metrics
    /// (`heart_rate`, `output`, `cadence`); unrecognized metrics neither
    /// extend the sequence nor populate any field. A missing or non-numeric
    /// value leaves that one field absent on an otherwise-present sample.
    pub fn parse(workout: &PlatformWorkout) -> Vec<PlatformSample> {
        let Some(samples) = &workout.samples else {
            return Vec::new();
        };

        let metrics: Vec<&Metric> = samples
            .metrics
            .iter()
            .filter(|m| is_recognized(&m.slug))
            .collect();

        let len = metrics.iter().map(|m| m.values.len()).max().unwrap_or(0);
        let mut out = Vec::with_capacity(len);

        for index in 0..len {
            let mut sample = PlatformSample {
                time: workout.start_time + Duration::seconds(index as i64),
                heart_rate: None,
                power: None,
                cadence: None,
            };

            for metric in &metrics {
                let Some(value) = metric.values.get(index).and_then(numeric_value) else {
                    continue;
                };

                match metric.slug.as_str() {
                    METRIC_HEART_RATE => sample.heart_rate = integer_value(value),
                    METRIC_OUTPUT => sample.power = Some(value),
                    METRIC_CADENCE => sample.cadence = integer_value(value),
                    _ => {}
                }
            }

            out.push(sample);
        }

        out
    }
}

fn is_recognized(slug: &str) -> bool {
    matches!(slug, METRIC_HEART_RATE | METRIC_OUTPUT | METRIC_CADENCE)
}

/// Extract a finite numeric value from a raw metric entry, accepting numbers
/// and numeric strings
fn numeric_value(value: &serde_json::Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .filter(|v| v.is_finite())
}

fn integer_value(value: f64) -> Option<u16> {
    u16::try_from(value.round() as i64).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn workout(metrics: Vec<Metric>) -> PlatformWorkout {
        PlatformWorkout {
            start_time: utc("2024-03-01T10:00:00Z"),
            samples: Some(WorkoutSamples { metrics }),
        }
    }

    fn metric(slug: &str, values: Vec<serde_json::Value>) -> Metric {
        Metric {
            slug: slug.to_string(),
            values,
        }
    }

    #[test]
    fn test_heart_rate_metric_anchored_at_start() {
        let w = workout(vec![metric(
            METRIC_HEART_RATE,
            vec![json!(130), json!(135), json!(140)],
        )]);

        let samples = PlatformAdapter::parse(&w);

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].time, utc("2024-03-01T10:00:00Z"));
        assert_eq!(samples[1].time, utc("2024-03-01T10:00:01Z"));
        assert_eq!(samples[2].time, utc("2024-03-01T10:00:02Z"));
        assert_eq!(samples[0].heart_rate, Some(130));
        assert_eq!(samples[1].heart_rate, Some(135));
        assert_eq!(samples[2].heart_rate, Some(140));
    }

    #[test]
    fn test_all_recognized_metrics_populate_one_sample() {
        let w = workout(vec![
            metric(METRIC_HEART_RATE, vec![json!(150)]),
            metric(METRIC_OUTPUT, vec![json!(212.5)]),
            metric(METRIC_CADENCE, vec![json!(88)]),
        ]);

        let samples = PlatformAdapter::parse(&w);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].heart_rate, Some(150));
        assert_eq!(samples[0].power, Some(212.5));
        assert_eq!(samples[0].cadence, Some(88));
    }

    #[test]
    fn test_unrecognized_metrics_are_ignored_entirely() {
        let w = workout(vec![
            metric(METRIC_HEART_RATE, vec![json!(150)]),
            metric("speed", vec![json!(30.1), json!(30.5), json!(31.0)]),
            metric("distance", vec![json!(1.0), json!(2.0)]),
        ]);

        let samples = PlatformAdapter::parse(&w);

        // Unrecognized metrics must not extend the sequence
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].heart_rate, Some(150));
    }

    #[test]
    fn test_sequence_length_spans_all_recognized_metrics() {
        let w = workout(vec![
            metric(METRIC_HEART_RATE, vec![json!(150)]),
            metric(METRIC_OUTPUT, vec![json!(200.0), json!(205.0), json!(210.0)]),
        ]);

        let samples = PlatformAdapter::parse(&w);

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].heart_rate, Some(150));
        assert_eq!(samples[1].heart_rate, None);
        assert_eq!(samples[2].power, Some(210.0));
    }

    #[test]
    fn test_null_value_leaves_single_field_absent() {
        let w = workout(vec![
            metric(METRIC_HEART_RATE, vec![json!(150), json!(null), json!(152)]),
            metric(METRIC_OUTPUT, vec![json!(200.0), json!(201.0), json!(202.0)]),
        ]);

        let samples = PlatformAdapter::parse(&w);

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1].heart_rate, None);
        // The sample itself is still present, with the other field populated
        assert_eq!(samples[1].power, Some(201.0));
    }

    #[test]
    fn test_numeric_string_values_are_accepted() {
        let w = workout(vec![metric(
            METRIC_HEART_RATE,
            vec![json!("151"), json!("not a number")],
        )]);

        let samples = PlatformAdapter::parse(&w);

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].heart_rate, Some(151));
        assert_eq!(samples[1].heart_rate, None);
    }

    #[test]
    fn test_out_of_range_integer_is_left_absent() {
        let w = workout(vec![metric(
            METRIC_HEART_RATE,
            vec![json!(-5), json!(70000)],
        )]);

        let samples = PlatformAdapter::parse(&w);

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].heart_rate, None);
        assert_eq!(samples[1].heart_rate, None);
    }

    #[test]
    fn test_missing_samples_container_yields_empty_sequence() {
        let w = PlatformWorkout {
            start_time: utc("2024-03-01T10:00:00Z"),
            samples: None,
        };

        assert!(PlatformAdapter::parse(&w).is_empty());
    }

    #[test]
    fn test_empty_metrics_yield_empty_sequence() {
        let w = workout(Vec::new());
        assert!(PlatformAdapter::parse(&w).is_empty());
    }

    #[test]
    fn test_parse_json_round_trip() {
        let raw = r#"{
            "start_time": "2024-03-01T10:00:00Z",
            "samples": {
                "metrics": [
                    { "slug": "heart_rate", "values": [130, 135, 140] },
                    { "slug": "output", "values": [180.5, null, 190.0] }
                ]
            }
        }"#;

        let samples = PlatformAdapter::parse_json(raw).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].heart_rate, Some(130));
        assert_eq!(samples[0].power, Some(180.5));
        assert_eq!(samples[1].power, None);
    }

    #[test]
    fn test_parse_json_invalid_payload_is_an_error() {
        assert!(PlatformAdapter::parse_json("not valid json").is_err());
    }
}
