//! Command-line interface for claimline
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Highlight fact-checked claims inside timestamped transcripts
#[derive(Parser, Debug)]
#[command(
    name = "claimline",
    version,
    about = "Highlight fact-checked claims inside timestamped transcripts"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress warnings and the unanchored-claims legend
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Transcript file (reads stdin when omitted and input is piped)
    #[arg(long, short = 't', value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Claims JSON file produced by the upstream fact-check step
    #[arg(long, short = 'c', value_name = "PATH")]
    pub claims: Option<PathBuf>,

    /// Navigation window size (default: 20s). Examples: 20, 45s, 1m
    #[arg(long, short = 'd', value_name = "DURATION", value_parser = parse_block_duration)]
    pub block_duration: Option<u32>,

    /// Emit annotated blocks as JSON instead of rendered text
    #[arg(long)]
    pub json: bool,

    /// Color output: auto, always, never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<String>,
}

/// Parse a block duration string into seconds.
///
/// Supports bare numbers (seconds) and any duration format accepted by
/// `humantime`: single-unit (`45s`, `2m`) and compound (`1m30s`).
fn parse_block_duration(s: &str) -> Result<u32, String> {
    let s = s.trim();
    // Bare number → seconds
    if let Ok(secs) = s.parse::<u32>() {
        return Ok(secs);
    }
    humantime::parse_duration(s)
        .map_err(|e| e.to_string())
        .and_then(|d| {
            u32::try_from(d.as_secs()).map_err(|_| "duration too large".to_string())
        })
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List transcript blocks with their time windows (no claim alignment)
    Blocks {
        /// Transcript file (reads stdin when omitted and input is piped)
        #[arg(value_name = "PATH")]
        transcript: Option<PathBuf>,

        /// Navigation window size (default: 20s). Examples: 20, 45s, 1m
        #[arg(long, short = 'd', value_name = "DURATION", value_parser = parse_block_duration)]
        block_duration: Option<u32>,

        /// Emit blocks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a claims file: counts by status, optional anchoring check
    Claims {
        /// Claims JSON file
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Transcript to check which claims anchor
        #[arg(long, short = 't', value_name = "PATH")]
        transcript: Option<PathBuf>,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// List current configuration values
    List,
    /// Dump a commented configuration template
    Dump,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_command() {
        let cli = Cli::try_parse_from(["claimline"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.transcript.is_none());
        assert!(cli.claims.is_none());
        assert!(cli.block_duration.is_none());
        assert!(!cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn parse_annotate_flags() {
        let cli = Cli::try_parse_from([
            "claimline",
            "-t",
            "town_hall.txt",
            "--claims",
            "claims.json",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.transcript, Some(PathBuf::from("town_hall.txt")));
        assert_eq!(cli.claims, Some(PathBuf::from("claims.json")));
        assert!(cli.json);
    }

    #[test]
    fn parse_block_duration_bare_number() {
        let cli = Cli::try_parse_from(["claimline", "--block-duration", "45"]).unwrap();
        assert_eq!(cli.block_duration, Some(45));
    }

    #[test]
    fn parse_block_duration_humantime() {
        let cli = Cli::try_parse_from(["claimline", "-d", "1m30s"]).unwrap();
        assert_eq!(cli.block_duration, Some(90));
    }

    #[test]
    fn parse_block_duration_rejects_garbage() {
        assert!(Cli::try_parse_from(["claimline", "-d", "soon"]).is_err());
    }

    #[test]
    fn parse_blocks_subcommand() {
        let cli = Cli::try_parse_from(["claimline", "blocks", "town_hall.txt", "-d", "60"]).unwrap();
        match cli.command {
            Some(Commands::Blocks {
                transcript,
                block_duration,
                json,
            }) => {
                assert_eq!(transcript, Some(PathBuf::from("town_hall.txt")));
                assert_eq!(block_duration, Some(60));
                assert!(!json);
            }
            other => panic!("expected blocks subcommand, got {:?}", other),
        }
    }

    #[test]
    fn parse_claims_subcommand() {
        let cli =
            Cli::try_parse_from(["claimline", "claims", "claims.json", "-t", "town_hall.txt"])
                .unwrap();
        match cli.command {
            Some(Commands::Claims { path, transcript }) => {
                assert_eq!(path, PathBuf::from("claims.json"));
                assert_eq!(transcript, Some(PathBuf::from("town_hall.txt")));
            }
            other => panic!("expected claims subcommand, got {:?}", other),
        }
    }

    #[test]
    fn parse_config_actions() {
        for (arg, want_dump) in [("path", false), ("list", false), ("dump", true)] {
            let cli = Cli::try_parse_from(["claimline", "config", arg]).unwrap();
            match cli.command {
                Some(Commands::Config { action }) => {
                    assert_eq!(matches!(action, ConfigAction::Dump), want_dump);
                }
                other => panic!("expected config subcommand, got {:?}", other),
            }
        }
    }
}
