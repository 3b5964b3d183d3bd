//! CLI entry point for clawcheck.
//!
//! Validates one skill and exits with status 0 when it passed, 1 otherwise.

mod cli;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clawcheck_skills::{CheckerConfig, JsonReport, SkillChecker, render_text};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, OutputFormat};

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "warn" });

    let Some(path) = cli.path.as_deref() else {
        print_usage();
        return Ok(ExitCode::FAILURE);
    };

    let config = load_config(cli.config.as_deref())?;
    let checker = SkillChecker::new(config);

    info!(path = %path.display(), "validating skill");
    let result = checker.check_path(path);
    debug!(passed = result.passed(), "validation finished");

    match cli.format {
        OutputFormat::Text => {
            print!(
                "{}",
                render_text(&result, path, &checker.config().hint_reference)
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonReport::new(&result))
                .context("failed to serialize report")?;
            println!("{json}");
        }
    }

    Ok(if result.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_config(path: Option<&Path>) -> Result<CheckerConfig> {
    match path {
        Some(path) => CheckerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(CheckerConfig::default()),
    }
}

fn print_usage() {
    println!("{}", Cli::command().render_usage());
    println!("  <PATH>: Path to skill directory or SKILL.md");
    println!();
    println!("Example:");
    println!("  clawcheck ./skills/my-skill");
    println!("  clawcheck ./skills/my-skill/SKILL.md");
}

/// Initialize the tracing subscriber with the given default log level.
///
/// Logs go to stderr so reports on stdout stay machine-readable.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
