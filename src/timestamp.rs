//! Bracketed timestamp parsing and display formatting.
//!
//! Transcript markers come from an upstream transcription service and are not
//! trusted: a malformed marker degrades to `0` seconds instead of failing, so
//! one bad marker can never take down rendering of the rest of the transcript.

/// Parse a bracket-stripped `mm:ss` or `hh:mm:ss` marker into seconds.
///
/// Two colon-separated fields are read as minutes:seconds, three as
/// hours:minutes:seconds. Any other field count, or a field that is not a
/// number, returns `0`. Never panics.
pub fn parse_timestamp(marker: &str) -> u32 {
    let fields: Option<Vec<u32>> = marker
        .trim()
        .split(':')
        .map(|field| field.parse().ok())
        .collect();

    match fields.as_deref() {
        Some([minutes, seconds]) => minutes * 60 + seconds,
        Some([hours, minutes, seconds]) => hours * 3600 + minutes * 60 + seconds,
        _ => 0,
    }
}

/// Format a seconds value for display: `mm:ss`, or `h:mm:ss` once an hour is
/// reached.
///
/// Minutes and seconds are zero-padded to two digits; the hours field is
/// omitted entirely when zero. The parser accepts both shapes, so
/// `format_seconds(parse_timestamp(x)) == x` holds for any `x` that already
/// follows the zero-hours-omitted convention.
pub fn format_seconds(total: u32) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
