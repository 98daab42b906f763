//! Claim alignment: locate claim texts inside transcript blocks and emit a
//! render-ready span sequence.
//!
//! Matching is whitespace-tolerant and case-insensitive, but the emitted spans
//! always slice the original text verbatim: for any block, concatenating the
//! span texts in order reproduces the block text character for character.
//! Claims that never appear are omitted without error, since upstream
//! extraction may paraphrase rather than quote.

mod normalize;

use serde::Serialize;

use crate::claim::Claim;
use crate::segment::{TranscriptBlock, extract_segments, group_into_blocks};
use normalize::{NormalizedText, normalize};

/// A run of original text, either plain or highlighted with one claim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSpan {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim: Option<Claim>,
}

impl TextSpan {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            claim: None,
        }
    }

    fn highlighted(text: &str, claim: &Claim) -> Self {
        Self {
            text: text.to_string(),
            claim: Some(claim.clone()),
        }
    }

    pub fn is_highlight(&self) -> bool {
        self.claim.is_some()
    }
}

/// A located occurrence of one claim, in original-text byte offsets.
/// Half-open; non-overlapping after resolution.
#[derive(Debug, Clone, Copy)]
struct MatchSpan<'a> {
    start: usize,
    end: usize,
    claim: &'a Claim,
}

/// One transcript block plus its render spans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedBlock {
    pub block: TranscriptBlock,
    pub spans: Vec<TextSpan>,
}

/// A fully annotated transcript, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnnotatedTranscript {
    /// Timestamped transcript split into navigable blocks.
    Timed { blocks: Vec<AnnotatedBlock> },
    /// No timestamp markers anywhere; the whole transcript as one untimed run.
    Untimed { spans: Vec<TextSpan> },
}

/// Find every occurrence of every claim inside `text`.
///
/// Claims whose normalized text is empty are skipped. Multiple occurrences of
/// the same claim are all collected; each search resumes at the end of the
/// previous hit.
fn find_match_spans<'a>(text: &str, claims: &'a [Claim]) -> Vec<MatchSpan<'a>> {
    let haystack = NormalizedText::new(text);
    let mut spans = Vec::new();

    for claim in claims {
        let needle = normalize(&claim.exact_text);
        if needle.is_empty() {
            continue;
        }
        let mut from = 0;
        while let Some(found) = haystack.as_str()[from..].find(&needle) {
            let norm_start = from + found;
            let norm_end = norm_start + needle.len();
            let (start, end) = haystack.original_range(norm_start, norm_end);
            spans.push(MatchSpan { start, end, claim });
            from = norm_end;
        }
    }
    spans
}

/// Drop overlapping spans, keeping the earliest-starting one.
///
/// Stable sort by start offset, then a single walk keeping a span only when it
/// begins at or after the previous kept span's end. Ties at the same start go
/// to the claim listed first. Dropped spans are gone entirely for this block,
/// never merged or truncated.
fn resolve_overlaps(mut spans: Vec<MatchSpan<'_>>) -> Vec<MatchSpan<'_>> {
    spans.sort_by_key(|span| span.start);

    let mut kept: Vec<MatchSpan<'_>> = Vec::with_capacity(spans.len());
    for span in spans {
        if kept.last().is_none_or(|prev| span.start >= prev.end) {
            kept.push(span);
        }
    }
    kept
}

/// Build the render span sequence for one block's text.
///
/// Gaps between matches become plain spans (empty gaps are not emitted),
/// matches become highlighted spans sliced verbatim from the original, and
/// any remainder after the last match becomes a trailing plain span. With no
/// surviving matches the whole text is returned as a single plain span.
pub fn align_block(text: &str, claims: &[Claim]) -> Vec<TextSpan> {
    let kept = resolve_overlaps(find_match_spans(text, claims));
    if kept.is_empty() {
        return vec![TextSpan::plain(text)];
    }

    let mut spans = Vec::with_capacity(kept.len() * 2 + 1);
    let mut cursor = 0;
    for m in kept {
        if m.start > cursor {
            spans.push(TextSpan::plain(&text[cursor..m.start]));
        }
        spans.push(TextSpan::highlighted(&text[m.start..m.end], m.claim));
        cursor = m.end;
    }
    if cursor < text.len() {
        spans.push(TextSpan::plain(&text[cursor..]));
    }
    spans
}

/// Segment a transcript and align the claim list against every block.
///
/// This is the engine's top-level operation: a pure function of its inputs,
/// recomputed from scratch on every call. When the transcript carries no
/// timestamp markers at all, the whole string is aligned as one untimed run
/// instead.
pub fn annotate(transcript: &str, claims: &[Claim], block_duration: u32) -> AnnotatedTranscript {
    let segments = extract_segments(transcript);
    if segments.is_empty() {
        return AnnotatedTranscript::Untimed {
            spans: align_block(transcript, claims),
        };
    }

    let blocks = group_into_blocks(&segments, block_duration)
        .into_iter()
        .map(|block| {
            let spans = align_block(&block.text, claims);
            AnnotatedBlock { block, spans }
        })
        .collect();
    AnnotatedTranscript::Timed { blocks }
}

/// Claims that highlighted nowhere in the annotated transcript.
///
/// Unmatched claims are expected, not an error; they still belong in a
/// summary view, just without a position to jump to.
pub fn unanchored_claims<'a>(
    annotated: &AnnotatedTranscript,
    claims: &'a [Claim],
) -> Vec<&'a Claim> {
    let highlighted: Vec<&Claim> = match annotated {
        AnnotatedTranscript::Timed { blocks } => blocks
            .iter()
            .flat_map(|b| &b.spans)
            .filter_map(|span| span.claim.as_ref())
            .collect(),
        AnnotatedTranscript::Untimed { spans } => {
            spans.iter().filter_map(|span| span.claim.as_ref()).collect()
        }
    };

    claims
        .iter()
        .filter(|claim| !highlighted.iter().any(|h| h == claim))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimStatus;

    fn claim(exact_text: &str) -> Claim {
        Claim {
            exact_text: exact_text.to_string(),
            status: ClaimStatus::Verified,
            severity: None,
            explanation: String::new(),
            sources: Vec::new(),
            timestamp: None,
        }
    }

    fn joined(spans: &[TextSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn exact_match_is_highlighted() {
        let spans = align_block("Inflation dropped sharply.", &[claim("inflation dropped sharply")]);
        assert_eq!(spans.len(), 2);
        assert!(spans[0].is_highlight());
        assert_eq!(spans[0].text, "Inflation dropped sharply");
        assert!(!spans[1].is_highlight());
        assert_eq!(spans[1].text, ".");
    }

    #[test]
    fn whitespace_drift_still_matches_at_correct_offsets() {
        let text = "so the   cat\nsat there";
        let spans = align_block(text, &[claim("the cat sat")]);

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].text, "so ");
        assert_eq!(spans[1].text, "the   cat\nsat");
        assert!(spans[1].is_highlight());
        assert_eq!(spans[2].text, " there");
        assert_eq!(joined(&spans), text);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let spans = align_block("we discussed quantum computing today", &[claim("Quantum Computing")]);
        assert!(spans.iter().any(|s| s.is_highlight() && s.text == "quantum computing"));
    }

    #[test]
    fn every_occurrence_is_highlighted() {
        let text = "yes we can. yes we can.";
        let spans = align_block(text, &[claim("yes we can")]);
        let hits: Vec<_> = spans.iter().filter(|s| s.is_highlight()).collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(joined(&spans), text);
    }

    #[test]
    fn unmatched_claim_leaves_text_as_single_plain_span() {
        let spans = align_block("The economy grew.", &[claim("GDP contracted")]);
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].is_highlight());
        assert_eq!(spans[0].text, "The economy grew.");
    }

    #[test]
    fn empty_claim_text_is_skipped() {
        let spans = align_block("some text", &[claim(""), claim("   \n ")]);
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].is_highlight());
    }

    #[test]
    fn overlapping_claims_keep_earliest_start_only() {
        let text = "the cat sat down";
        let spans = align_block(text, &[claim("the cat sat"), claim("cat sat down")]);

        let hits: Vec<_> = spans.iter().filter(|s| s.is_highlight()).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "the cat sat");
        assert_eq!(joined(&spans), text);
    }

    #[test]
    fn same_start_tie_goes_to_first_listed_claim() {
        let text = "the cat sat down";
        let spans = align_block(text, &[claim("the cat"), claim("the cat sat")]);

        let hits: Vec<_> = spans.iter().filter(|s| s.is_highlight()).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "the cat");
        assert_eq!(
            hits[0].claim.as_ref().map(|c| c.exact_text.as_str()),
            Some("the cat")
        );
    }

    #[test]
    fn adjacent_matches_emit_no_empty_plain_span() {
        let text = "red green";
        let spans = align_block(text, &[claim("red "), claim("green")]);
        assert!(spans.iter().all(|s| !s.text.is_empty()));
        assert_eq!(joined(&spans), text);
    }

    #[test]
    fn span_concatenation_always_reproduces_input() {
        let texts = [
            "",
            "plain",
            "  leading and trailing  ",
            "the cat sat on\n\tthe   mat while the cat sat",
            "Ünïcödé   text with Ünïcödé repeats",
        ];
        let claims = [claim("the cat sat"), claim("ünïcödé"), claim("mat")];

        for text in texts {
            let spans = align_block(text, &claims);
            assert_eq!(joined(&spans), text, "reconstruction failed for {:?}", text);
        }
    }

    #[test]
    fn kept_spans_never_overlap() {
        let text = "a b c a b c a b";
        let claims = [claim("a b c"), claim("b c a"), claim("c a b"), claim("a b")];
        let kept = resolve_overlaps(find_match_spans(text, &claims));

        for pair in kept.windows(2) {
            assert!(
                pair[0].end <= pair[1].start,
                "spans [{}, {}) and [{}, {}) overlap",
                pair[0].start,
                pair[0].end,
                pair[1].start,
                pair[1].end
            );
        }
    }

    #[test]
    fn annotate_splits_into_timed_blocks() {
        let transcript = "[0:05] The economy grew. [0:30] Inflation dropped sharply.";
        let annotated = annotate(transcript, &[claim("inflation dropped sharply")], 20);

        let AnnotatedTranscript::Timed { blocks } = annotated else {
            panic!("timestamped transcript must produce timed blocks");
        };
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].spans.iter().all(|s| !s.is_highlight()));
        assert!(blocks[1].spans.iter().any(|s| s.is_highlight()));
    }

    #[test]
    fn annotate_falls_back_to_untimed_without_markers() {
        let transcript = "No markers here, but inflation dropped sharply anyway.";
        let annotated = annotate(transcript, &[claim("inflation dropped sharply")], 20);

        let AnnotatedTranscript::Untimed { spans } = annotated else {
            panic!("marker-free transcript must produce the untimed fallback");
        };
        assert!(spans.iter().any(|s| s.is_highlight()));
        assert_eq!(joined(&spans), transcript);
    }

    #[test]
    fn unanchored_claims_reports_misses_only() {
        let transcript = "[0:05] The economy grew.";
        let claims = [claim("the economy grew"), claim("GDP contracted")];
        let annotated = annotate(transcript, &claims, 20);

        let missing = unanchored_claims(&annotated, &claims);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].exact_text, "GDP contracted");
    }
}
