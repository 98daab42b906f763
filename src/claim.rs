//! Claim records produced by the upstream fact-check process.
//!
//! Claims arrive as a JSON array from the fact-check pipeline. Only
//! `exact_text` affects alignment; every other field is pass-through metadata
//! that the presentation layer attaches to highlighted spans (tooltips,
//! legend). This crate never validates or interprets that metadata.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ClaimlineError, Result};

/// Verification verdict assigned to a claim upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Verified,
    False,
    Disputed,
    Unverified,
    Opinion,
}

/// How consequential a false or disputed claim is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A single fact-checked claim.
///
/// Field names on the wire are camelCase because the claims file is written
/// by the upstream extraction service. `exact_text` is expected, but not
/// guaranteed, to appear verbatim (modulo whitespace) in the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub exact_text: String,
    pub status: ClaimStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Parse a claims list from a JSON array string.
pub fn claims_from_json(json: &str) -> Result<Vec<Claim>> {
    serde_json::from_str(json).map_err(|e| ClaimlineError::ClaimsParse {
        message: e.to_string(),
    })
}

/// Load a claims list from a JSON file.
pub fn load_claims(path: &Path) -> Result<Vec<Claim>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ClaimlineError::ClaimsFileNotFound {
                path: path.display().to_string(),
            }
        } else {
            ClaimlineError::Io(e)
        }
    })?;
    claims_from_json(&contents)
}
