//! Schema checks for a SKILL.md file.
//!
//! A run locates the file, parses it, then applies four independent groups
//! of checks (required fields, optional fields, gating metadata, body).
//! Structural problems (missing file, broken frontmatter) stop the run;
//! every other problem is recorded and the remaining checks still run.

mod gating;

use std::path::{Path, PathBuf};

use serde_yaml::Mapping;

pub use gating::{InstallerKind, VALID_OS, check_gating_metadata};

use crate::config::CheckerConfig;
use crate::error::{Result, SkillError};
use crate::parser::parse_document;
use crate::types::ValidationResult;
use crate::value::{is_truthy, render, type_name};

/// Top-level keys every skill must define with a non-empty value.
pub const REQUIRED_FIELDS: &[&str] = &["name", "description"];

/// What an optional top-level field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    Bool,
    Str,
    /// A string with exactly this value.
    Literal(&'static str),
}

/// Known optional top-level keys and their expected types.
pub const OPTIONAL_FIELDS: &[(&str, ExpectedType)] = &[
    ("user-invocable", ExpectedType::Bool),
    ("disable-model-invocation", ExpectedType::Bool),
    ("command-dispatch", ExpectedType::Literal("tool")),
    ("command-tool", ExpectedType::Str),
];

/// Validates SKILL.md files.
#[derive(Debug, Clone, Default)]
pub struct SkillChecker {
    config: CheckerConfig,
}

impl SkillChecker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Resolve the SKILL.md path for a skill directory or file.
    ///
    /// A directory resolves to the configured skill filename inside it; any
    /// other path is taken as the skill file itself.
    pub fn locate(&self, path: &Path) -> Result<PathBuf> {
        let candidate = if path.is_dir() {
            path.join(&self.config.skill_file)
        } else {
            path.to_path_buf()
        };

        if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(SkillError::NotFound {
                name: self.config.skill_file.clone(),
                path: candidate,
            })
        }
    }

    /// Validate the skill at `path` (a skill directory or its SKILL.md).
    pub fn check_path(&self, path: &Path) -> ValidationResult {
        let mut result = ValidationResult::default();

        let skill_file = match self.locate(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(path = %path.display(), "skill file not found");
                result.error(e.to_string());
                return result;
            }
        };

        let file_name = skill_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.config.skill_file.clone());
        result.info(format!("{file_name} found"));
        result.skill_file = Some(skill_file.clone());

        let content = match std::fs::read_to_string(&skill_file) {
            Ok(content) => content,
            Err(source) => {
                let e = SkillError::Io {
                    path: skill_file,
                    source,
                };
                result.error(e.to_string());
                return result;
            }
        };

        self.check_content_into(&content, &mut result);
        result
    }

    /// Validate SKILL.md text that is already in memory.
    pub fn check_content(&self, content: &str) -> ValidationResult {
        let mut result = ValidationResult::default();
        self.check_content_into(content, &mut result);
        result
    }

    fn check_content_into(&self, content: &str, result: &mut ValidationResult) {
        let doc = match parse_document(content) {
            Ok(doc) => doc,
            Err(e) => {
                result.error(e.to_string());
                return;
            }
        };
        result.info("YAML frontmatter parsed successfully");

        check_required_fields(&doc.frontmatter, result);
        check_optional_fields(&doc.frontmatter, result);
        check_gating_metadata(&doc.frontmatter, result);
        check_body(&doc.body, &self.config, result);

        tracing::debug!(
            info = result.info.len(),
            warnings = result.warnings.len(),
            errors = result.errors.len(),
            "skill checked"
        );
    }
}

/// Every required field must be present with a truthy value.
pub fn check_required_fields(frontmatter: &Mapping, result: &mut ValidationResult) {
    for field in REQUIRED_FIELDS {
        match frontmatter.get(*field) {
            Some(value) if is_truthy(value) => {
                result.info(format!("Required field '{field}' present"));
            }
            _ => result.error(format!("Missing required field: '{field}'")),
        }
    }
}

/// Optional fields are reported when present; a wrong type only warns.
pub fn check_optional_fields(frontmatter: &Mapping, result: &mut ValidationResult) {
    for (field, expected) in OPTIONAL_FIELDS {
        let Some(value) = frontmatter.get(*field) else {
            continue;
        };
        result.info(format!(
            "Optional field '{field}' present (value: {})",
            render(value)
        ));

        match expected {
            ExpectedType::Bool if !value.is_bool() => result.warning(format!(
                "'{field}' should be boolean (true/false), got: {}",
                render(value)
            )),
            ExpectedType::Str if !value.is_string() => result.warning(format!(
                "'{field}' should be string, got: {}",
                type_name(value)
            )),
            ExpectedType::Literal(want) if value.as_str() != Some(*want) => {
                result.warning(format!(
                    "'{field}' should be '{want}', got: {}",
                    render(value)
                ))
            }
            _ => {}
        }
    }
}

/// Check the markdown body for content and leftover placeholders.
pub fn check_body(body: &str, config: &CheckerConfig, result: &mut ValidationResult) {
    let skill_file = &config.skill_file;
    let placeholder_marker = &config.placeholder_marker;

    if body.trim().is_empty() {
        result.warning(format!(
            "{skill_file} body is empty. Add instructions for using this skill."
        ));
        return;
    }

    let word_count = body.split_whitespace().count();
    result.info(format!("{skill_file} body has {word_count} words"));

    if !placeholder_marker.is_empty()
        && body
            .to_uppercase()
            .contains(&placeholder_marker.to_uppercase())
    {
        result.warning(format!(
            "{skill_file} contains {placeholder_marker} items. Complete before publishing."
        ));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
