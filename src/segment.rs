//! Transcript segmentation: timestamp scanning and fixed-window grouping.
//!
//! A transcript is a plain string with zero or more `[mm:ss]` / `[hh:mm:ss]`
//! markers. Scanning yields one segment per marker; grouping folds consecutive
//! segments into fixed-duration blocks whose boundaries snap to clock
//! multiples, so they double as stable jump targets for playback navigation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::timestamp::{format_seconds, parse_timestamp};

/// Bracketed timestamp marker: `[mm:ss]` or `[hh:mm:ss]`.
#[allow(clippy::expect_used)]
static TIMESTAMP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d{1,2}:\d{2}(?::\d{2})?)\]").expect("Invalid regex"));

/// One timestamp-prefixed run of transcript text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptSegment {
    pub timestamp_seconds: u32,
    pub text: String,
}

/// A fixed-duration window of transcript text.
///
/// `text` is the space-joined concatenation, in source order, of every member
/// segment's text. `start_seconds` is always a multiple of the block duration;
/// `end_seconds` is the timestamp of the last member segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptBlock {
    pub start_seconds: u32,
    pub end_seconds: u32,
    pub start_label: String,
    pub end_label: String,
    pub text: String,
}

/// Scan a transcript for `[time] text` runs.
///
/// Each marker claims the text up to the next marker or end of string,
/// trimmed. Segments whose trimmed text is empty are discarded so they cannot
/// create empty blocks. Text before the first marker belongs to no segment.
/// A transcript without any markers yields an empty list, which callers treat
/// as the signal to render the whole transcript as one untimed run.
pub fn extract_segments(transcript: &str) -> Vec<TranscriptSegment> {
    let markers: Vec<(usize, usize, u32)> = TIMESTAMP_RE
        .captures_iter(transcript)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let time = captures.get(1)?;
            Some((whole.start(), whole.end(), parse_timestamp(time.as_str())))
        })
        .collect();

    let mut segments = Vec::with_capacity(markers.len());
    for (i, &(_, text_start, seconds)) in markers.iter().enumerate() {
        let text_end = markers.get(i + 1).map_or(transcript.len(), |next| next.0);
        let text = transcript[text_start..text_end].trim();
        if text.is_empty() {
            continue;
        }
        segments.push(TranscriptSegment {
            timestamp_seconds: seconds,
            text: text.to_string(),
        });
    }
    segments
}

/// Group segments into fixed-duration blocks.
///
/// Walks segments once in input order without sorting; the upstream service
/// emits non-decreasing timestamps. A segment opens a new block when no block
/// is open or its timestamp falls outside the open block's window; otherwise
/// its text is appended and the block's end advances. Window starts are
/// computed as `timestamp / duration * duration` rather than from the first
/// member's own time, so block boundaries are reproducible no matter where
/// the transcript starts. A zero duration is clamped to one second.
pub fn group_into_blocks(
    segments: &[TranscriptSegment],
    block_duration: u32,
) -> Vec<TranscriptBlock> {
    let duration = block_duration.max(1);
    let mut blocks: Vec<TranscriptBlock> = Vec::new();

    for segment in segments {
        match blocks.last_mut() {
            Some(block) if segment.timestamp_seconds < block.start_seconds + duration => {
                block.text.push(' ');
                block.text.push_str(&segment.text);
                block.end_seconds = segment.timestamp_seconds;
                block.end_label = format_seconds(segment.timestamp_seconds);
            }
            _ => {
                let start = segment.timestamp_seconds / duration * duration;
                blocks.push(TranscriptBlock {
                    start_seconds: start,
                    end_seconds: segment.timestamp_seconds,
                    start_label: format_seconds(start),
                    end_label: format_seconds(segment.timestamp_seconds),
                    text: segment.text.clone(),
                });
            }
        }
    }
    blocks
}
