//! Host device adapter
//!
//! Parses a host-device trackpoint document (Training Center Database XML)
//! and maps it to an ordered sequence of canonical host samples.

use crate::error::ReconcileError;
use crate::types::{HostSample, Position};
use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Trackpoint document adapter
pub struct HostAdapter;

impl HostAdapter {
    /// Parse a trackpoint document into an ordered sample sequence.
    ///
    /// Empty or whitespace-only input is a valid "no data" state and yields
    /// an empty sequence; malformed XML is an error. Trackpoints without a
    /// timestamp cannot be placed on a timeline and are dropped without
    /// aborting the rest of the document.
    pub fn parse(document: &str) -> Result<Vec<HostSample>, ReconcileError> {
        if document.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = Reader::from_reader(document.as_bytes());
        reader.trim_text(true);

        let mut samples = Vec::new();
        let mut point = PendingTrackpoint::default();
        let mut in_trackpoint = false;
        let mut in_heart_rate = false;
        let mut in_position = false;
        let mut current_element = String::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let name = e.local_name();
                    let name = std::str::from_utf8(name.as_ref()).unwrap_or_default();

                    match name {
                        "Trackpoint" => {
                            in_trackpoint = true;
                            point = PendingTrackpoint::default();
                        }
                        "HeartRateBpm" if in_trackpoint => {
                            in_heart_rate = true;
                            current_element.clear();
                        }
                        "Position" if in_trackpoint => {
                            in_position = true;
                            current_element.clear();
                        }
                        _ if in_trackpoint => {
                            current_element = name.to_string();
                        }
                        _ => {}
                    }
                }
                Ok(Event::Text(e)) => {
                    if in_trackpoint {
                        let text = e.unescape()?;

                        match current_element.as_str() {
                            "Time" => point.time = text.parse::<DateTime<Utc>>().ok(),
                            "Value" if in_heart_rate => point.heart_rate = text.parse().ok(),
                            "Cadence" => point.cadence = text.parse().ok(),
                            "LatitudeDegrees" if in_position => point.lat = text.parse().ok(),
                            "LongitudeDegrees" if in_position => point.lon = text.parse().ok(),
                            _ => {}
                        }
                    }
                }
                Ok(Event::End(e)) => {
                    let name = e.local_name();
                    let name = std::str::from_utf8(name.as_ref()).unwrap_or_default();

                    match name {
                        "Trackpoint" => {
                            if let Some(sample) = point.take_sample() {
                                samples.push(sample);
                            }
                            in_trackpoint = false;
                        }
                        "HeartRateBpm" => in_heart_rate = false,
                        "Position" => in_position = false,
                        _ => current_element.clear(),
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(ReconcileError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(samples)
    }

    /// Parse a trackpoint document, degrading to an empty sequence when the
    /// document is malformed.
    ///
    /// Never fails: a corrupt document is logged and treated as "no data",
    /// the same as a legitimately absent host series.
    pub fn parse_lenient(document: &str) -> Vec<HostSample> {
        match Self::parse(document) {
            Ok(samples) => samples,
            Err(err) => {
                log::warn!("host document failed to parse, continuing without host series: {err}");
                Vec::new()
            }
        }
    }
}

/// Field accumulator for the trackpoint currently being read
#[derive(Default)]
struct PendingTrackpoint {
    time: Option<DateTime<Utc>>,
    heart_rate: Option<u16>,
    cadence: Option<u16>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl PendingTrackpoint {
    /// Finish the trackpoint: no timestamp means no sample, and a position
    /// needs both coordinates.
    fn take_sample(&mut self) -> Option<HostSample> {
        let point = std::mem::take(self);
        let time = point.time?;

        let position = match (point.lat, point.lon) {
            (Some(lat), Some(lon)) => Some(Position { lat, lon }),
            _ => None,
        };

        Some(HostSample {
            time,
            heart_rate: point.heart_rate,
            cadence: point.cadence,
            position,
        })
    }
}
