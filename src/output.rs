//! Shared rendering for terminal output.
//! Used by the default annotate run and the `blocks`/`claims` subcommands.

use std::io::{self, Write};

use crate::align::{AnnotatedBlock, AnnotatedTranscript, TextSpan};
use crate::claim::{Claim, ClaimStatus, Severity};
use crate::segment::TranscriptBlock;

const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const UNDERLINE: &str = "\x1b[4m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// ANSI color for a claim status. Total over the enum.
pub fn status_color(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Verified => GREEN,
        ClaimStatus::False => RED,
        ClaimStatus::Disputed => YELLOW,
        ClaimStatus::Unverified => DIM,
        ClaimStatus::Opinion => CYAN,
    }
}

/// Short display label for a claim status.
pub fn status_label(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Verified => "verified",
        ClaimStatus::False => "false",
        ClaimStatus::Disputed => "disputed",
        ClaimStatus::Unverified => "unverified",
        ClaimStatus::Opinion => "opinion",
    }
}

/// Short display label for a claim severity.
pub fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "low",
        Severity::Medium => "medium",
        Severity::High => "high",
    }
}

fn write_block_header(out: &mut impl Write, block: &TranscriptBlock, color: bool) -> io::Result<()> {
    if color {
        writeln!(
            out,
            "{BOLD}[{} \u{2013} {}]{RESET}",
            block.start_label, block.end_label
        )
    } else {
        writeln!(out, "[{} \u{2013} {}]", block.start_label, block.end_label)
    }
}

fn write_spans(out: &mut impl Write, spans: &[TextSpan], color: bool) -> io::Result<()> {
    for span in spans {
        match &span.claim {
            Some(claim) if color => write!(
                out,
                "{}{UNDERLINE}{}{RESET}",
                status_color(claim.status),
                span.text
            )?,
            _ => write!(out, "{}", span.text)?,
        }
    }
    writeln!(out)
}

/// Render an annotated transcript: one header-plus-text paragraph per block,
/// highlighted spans colored by claim status.
pub fn render_annotated(
    out: &mut impl Write,
    annotated: &AnnotatedTranscript,
    color: bool,
) -> io::Result<()> {
    match annotated {
        AnnotatedTranscript::Timed { blocks } => {
            for (i, AnnotatedBlock { block, spans }) in blocks.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write_block_header(out, block, color)?;
                write_spans(out, spans, color)?;
            }
        }
        AnnotatedTranscript::Untimed { spans } => {
            write_spans(out, spans, color)?;
        }
    }
    Ok(())
}

/// Render segmented blocks without claim alignment.
pub fn render_blocks(
    out: &mut impl Write,
    blocks: &[TranscriptBlock],
    color: bool,
) -> io::Result<()> {
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_block_header(out, block, color)?;
        writeln!(out, "{}", block.text)?;
    }
    Ok(())
}

/// Render the legend of claims that did not anchor anywhere.
pub fn render_legend(out: &mut impl Write, unanchored: &[&Claim], color: bool) -> io::Result<()> {
    if unanchored.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    if color {
        writeln!(out, "{DIM}Not found in transcript:{RESET}")?;
    } else {
        writeln!(out, "Not found in transcript:")?;
    }
    for claim in unanchored {
        write_claim_line(out, claim, color)?;
    }
    Ok(())
}

/// Render one claim as a status-labeled summary line.
pub fn write_claim_line(out: &mut impl Write, claim: &Claim, color: bool) -> io::Result<()> {
    let label = status_label(claim.status);
    if color {
        write!(
            out,
            "  {}{label:>10}{RESET}  {}",
            status_color(claim.status),
            claim.exact_text
        )?;
    } else {
        write!(out, "  {label:>10}  {}", claim.exact_text)?;
    }
    if let Some(severity) = claim.severity {
        if color {
            write!(out, " {DIM}({}){RESET}", severity_label(severity))?;
        } else {
            write!(out, " ({})", severity_label(severity))?;
        }
    }
    writeln!(out)
}
