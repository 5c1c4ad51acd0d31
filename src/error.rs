//! Error types for Telemerge

use thiserror::Error;

/// Errors that can occur while parsing source documents
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Malformed host document: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid workout JSON: {0}")]
    Json(#[from] serde_json::Error),
}
