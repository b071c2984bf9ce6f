//! Decoding diagnostic API payloads.
//!
//! The symptom-search endpoint wraps its results in an envelope while the
//! rule endpoints return a bare array. Both shapes are accepted.

use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::diagnostic::DiagnosticResult;
use crate::errors::PayloadError;

/// Envelope returned by the symptom-search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query_symptoms: Vec<String>,
    /// Informational; the length of `results` is authoritative.
    #[serde(default)]
    pub total_results: Option<usize>,
    pub results: Vec<DiagnosticResult>,
}

/// Parse a payload that is either a bare result array or a [`SearchResponse`].
///
/// Returns [`PayloadError::Empty`] when the payload carries no results.
pub fn parse_results(json: &str) -> Result<Vec<DiagnosticResult>, PayloadError> {
    let value: Value = serde_json::from_str(json)?;
    let results = match value {
        Value::Array(_) => serde_json::from_value::<Vec<DiagnosticResult>>(value)?,
        other => serde_json::from_value::<SearchResponse>(other)?.results,
    };

    if results.is_empty() {
        return Err(PayloadError::Empty);
    }

    tracing::debug!(count = results.len(), "parsed diagnostic payload");
    Ok(results)
}

/// Read a payload from any reader. `source_name` is used in error messages.
pub fn read_results<R: Read>(
    mut reader: R,
    source_name: &str,
) -> Result<Vec<DiagnosticResult>, PayloadError> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|source| PayloadError::Io {
            source_name: source_name.to_string(),
            source,
        })?;
    parse_results(&buf)
}
