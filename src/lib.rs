//! claimline - transcript segmentation and claim alignment
//!
//! Splits timestamped transcripts into fixed-duration, navigable blocks and
//! locates fact-checked claim texts inside them despite whitespace and case
//! drift, producing render-ready plain/highlighted span sequences that
//! reconstruct the original text character for character.

// Enforce error handling discipline
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod align;
pub mod claim;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
#[cfg(feature = "cli")]
pub mod output;
pub mod segment;
pub mod timestamp;

// Engine surface (segment → align)
pub use align::{
    AnnotatedBlock, AnnotatedTranscript, TextSpan, align_block, annotate, unanchored_claims,
};
pub use segment::{TranscriptBlock, TranscriptSegment, extract_segments, group_into_blocks};
pub use timestamp::{format_seconds, parse_timestamp};

// Claim input
pub use claim::{Claim, ClaimStatus, Severity, claims_from_json, load_claims};

// Error handling
pub use error::{ClaimlineError, Result};

// Config
pub use config::{ColorMode, Config};

/// Build version string with optional git commit hash.
///
/// Returns `"0.0.1+abc1234"` when git hash is available, `"0.0.1"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
