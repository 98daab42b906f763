//! Matching-side normalization and offset remapping.
//!
//! Matching runs against a lowercased, whitespace-collapsed copy of the block
//! text, but highlights must be sliced from the original string. Translating a
//! hit position in the normalized copy back to original byte offsets is the
//! highest-risk logic in the aligner (an off-by-one shifts highlight
//! boundaries mid-word), so it lives here as its own unit-tested type.

/// Normalize text for matching: lowercase, collapse every whitespace run to a
/// single space, trim. Used for claim text, where no offsets are needed.
pub(crate) fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            // Leading whitespace never becomes a space; trailing stays pending.
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// A normalized copy of an original text that remembers, for every normalized
/// byte, the original byte range of the character that produced it.
///
/// A run of one or more whitespace characters in the original collapses to
/// exactly one space whose range covers the whole run. A character whose
/// lowercase form expands to several characters (e.g. `İ`) keeps its single
/// original range on every produced byte, so slicing stays byte-exact.
#[derive(Debug)]
pub(crate) struct NormalizedText {
    text: String,
    ranges: Vec<(usize, usize)>,
}

impl NormalizedText {
    pub(crate) fn new(original: &str) -> Self {
        let mut text = String::with_capacity(original.len());
        let mut ranges = Vec::with_capacity(original.len());
        let mut space_run: Option<usize> = None;

        for (offset, c) in original.char_indices() {
            if c.is_whitespace() {
                if space_run.is_none() {
                    space_run = Some(offset);
                }
                continue;
            }
            if let Some(run_start) = space_run.take()
                && !text.is_empty()
            {
                text.push(' ');
                ranges.push((run_start, offset));
            }
            let char_end = offset + c.len_utf8();
            for lower in c.to_lowercase() {
                let before = text.len();
                text.push(lower);
                for _ in before..text.len() {
                    ranges.push((offset, char_end));
                }
            }
        }

        debug_assert_eq!(text.len(), ranges.len());
        Self { text, ranges }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    /// Map a normalized byte range back to original byte offsets.
    ///
    /// The range must be a non-empty match of a normalized needle: it lies on
    /// character boundaries and starts and ends on non-space characters, since
    /// normalized needles are trimmed and non-empty.
    pub(crate) fn original_range(&self, start: usize, end: usize) -> (usize, usize) {
        (self.ranges[start].0, self.ranges[end - 1].1)
    }
}
