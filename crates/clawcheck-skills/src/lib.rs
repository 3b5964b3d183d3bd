//! Schema checks for OpenClaw-compatible SKILL.md files.
//!
//! This crate provides:
//!
//! - **SKILL.md parser** — splits the YAML frontmatter from the markdown
//!   instructions and decodes it.
//!
//! - **Skill checker** — applies the documented schema rules (required and
//!   optional fields, `metadata.openclaw` gating, installers, body content)
//!   and collects findings graded info, warning, or error.
//!
//! - **Reports** — text and JSON renderings of a run.
//!
//! # Example
//!
//! ```rust,no_run
//! use clawcheck_skills::{CheckerConfig, SkillChecker};
//! use std::path::Path;
//!
//! let checker = SkillChecker::new(CheckerConfig::default());
//! let result = checker.check_path(Path::new("skills/todoist-cli"));
//!
//! for finding in &result.errors {
//!     println!("{finding}");
//! }
//! assert!(result.passed());
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod types;
pub mod value;

pub use checker::{
    InstallerKind, SkillChecker, check_body, check_gating_metadata, check_optional_fields,
    check_required_fields,
};
pub use config::CheckerConfig;
pub use error::{Result, SkillError};
pub use parser::{ParsedDocument, parse_document, split_frontmatter};
pub use report::{JsonReport, render_text};
pub use types::{Finding, Severity, ValidationResult};
