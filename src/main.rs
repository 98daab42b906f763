use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use claimline::align::{annotate, unanchored_claims};
use claimline::claim::{Claim, ClaimStatus, load_claims};
use claimline::cli::{Cli, Commands, ConfigAction};
use claimline::config::{ColorMode, Config};
use claimline::error::ClaimlineError;
use claimline::output;
use claimline::segment::{extract_segments, group_into_blocks};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        None => run_annotate(&cli),
        Some(Commands::Blocks {
            transcript,
            block_duration,
            json,
        }) => run_blocks(&cli, transcript.as_deref(), *block_duration, *json),
        Some(Commands::Claims { path, transcript }) => {
            run_claims(&cli, path, transcript.as_deref())
        }
        Some(Commands::Config { action }) => run_config(&cli, action),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(*shell, &mut Cli::command(), "claimline", &mut io::stdout());
            Ok(())
        }
    }
}

/// Load config from the given path (or the default location) and apply
/// environment overrides. CLI flags are layered on top by each command.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(Config::default_path);
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;
    Ok(config.with_env_overrides())
}

/// Read the transcript from a file, or from stdin when piped.
fn read_transcript(path: Option<&Path>) -> claimline::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(|e| ClaimlineError::TranscriptRead {
            origin: p.display().to_string(),
            message: e.to_string(),
        }),
        None => {
            if io::stdin().is_terminal() {
                return Err(ClaimlineError::Other(
                    "no transcript given; pass --transcript PATH or pipe text on stdin".to_string(),
                ));
            }
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map_err(|e| {
                ClaimlineError::TranscriptRead {
                    origin: "stdin".to_string(),
                    message: e.to_string(),
                }
            })?;
            Ok(text)
        }
    }
}

fn resolve_color(cli_color: Option<&str>, from_config: ColorMode) -> Result<ColorMode> {
    match cli_color {
        None => Ok(from_config),
        Some("auto") => Ok(ColorMode::Auto),
        Some("always") => Ok(ColorMode::Always),
        Some("never") => Ok(ColorMode::Never),
        Some(other) => bail!("invalid --color value '{}': expected auto, always, or never", other),
    }
}

fn use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal(),
    }
}

fn run_annotate(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let block_duration = cli
        .block_duration
        .unwrap_or(config.segment.block_duration_secs);
    let color = use_color(resolve_color(cli.color.as_deref(), config.render.color)?);

    let transcript = read_transcript(cli.transcript.as_deref())?;
    let claims = match &cli.claims {
        Some(path) => load_claims(path)?,
        None => {
            if !cli.quiet {
                eprintln!(
                    "{}",
                    "warning: no claims file given; rendering without highlights".yellow()
                );
            }
            Vec::new()
        }
    };

    let annotated = annotate(&transcript, &claims, block_duration);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &annotated)?;
        writeln!(out)?;
        return Ok(());
    }

    output::render_annotated(&mut out, &annotated, color)?;

    if config.render.show_unanchored && !cli.quiet {
        let missing = unanchored_claims(&annotated, &claims);
        output::render_legend(&mut out, &missing, color)?;
    }
    Ok(())
}

fn run_blocks(
    cli: &Cli,
    transcript_path: Option<&Path>,
    block_duration: Option<u32>,
    json: bool,
) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let duration = block_duration.unwrap_or(config.segment.block_duration_secs);
    let color = use_color(resolve_color(cli.color.as_deref(), config.render.color)?);

    let transcript = read_transcript(transcript_path)?;
    let segments = extract_segments(&transcript);
    if segments.is_empty() && !cli.quiet {
        eprintln!("{}", "warning: no timestamp markers found".yellow());
    }
    let blocks = group_into_blocks(&segments, duration);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &blocks)?;
        writeln!(out)?;
    } else {
        output::render_blocks(&mut out, &blocks, color)?;
    }
    Ok(())
}

fn run_claims(cli: &Cli, claims_path: &Path, transcript_path: Option<&Path>) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let color = use_color(resolve_color(cli.color.as_deref(), config.render.color)?);
    let claims = load_claims(claims_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{} claims", claims.len())?;
    for status in [
        ClaimStatus::Verified,
        ClaimStatus::False,
        ClaimStatus::Disputed,
        ClaimStatus::Unverified,
        ClaimStatus::Opinion,
    ] {
        let count = claims.iter().filter(|c| c.status == status).count();
        if count > 0 {
            writeln!(out, "  {:>10}: {}", output::status_label(status), count)?;
        }
    }
    writeln!(out)?;
    for claim in &claims {
        output::write_claim_line(&mut out, claim, color)?;
    }

    if let Some(path) = transcript_path {
        let transcript = read_transcript(Some(path))?;
        let annotated = annotate(&transcript, &claims, config.segment.block_duration_secs);
        let missing: Vec<&Claim> = unanchored_claims(&annotated, &claims);
        output::render_legend(&mut out, &missing, color)?;
        if missing.is_empty() && !cli.quiet {
            writeln!(out)?;
            writeln!(out, "all claims anchored in the transcript")?;
        }
    }
    Ok(())
}

fn run_config(cli: &Cli, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let path = cli
                .config
                .clone()
                .unwrap_or_else(Config::default_path);
            println!("{}", path.display());
        }
        ConfigAction::List => {
            let config = load_config(cli.config.as_deref())?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Dump => {
            print!("{}", Config::template());
        }
    }
    Ok(())
}
