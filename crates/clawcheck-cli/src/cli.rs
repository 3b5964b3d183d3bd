//! CLI argument definitions for clawcheck.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! running the check and reporting.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// clawcheck -- validate OpenClaw SKILL.md definitions.
#[derive(Parser, Debug)]
#[command(
    name = "clawcheck",
    version,
    about = "clawcheck -- validate OpenClaw SKILL.md definitions",
    long_about = "Checks a skill's SKILL.md frontmatter and body against the OpenClaw \
                  skill format and reports info, warnings, and errors. Exits with status 0 \
                  when no errors were found."
)]
pub struct Cli {
    /// Path to a skill directory or directly to its SKILL.md.
    pub path: Option<PathBuf>,

    /// Report format.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// TOML file overriding the checker defaults.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log checker internals to stderr.
    #[arg(long, short)]
    pub verbose: bool,
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Grouped, human-readable sections.
    Text,
    /// A single JSON object.
    Json,
}
