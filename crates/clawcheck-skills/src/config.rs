//! Checker configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides:
//!
//! ```toml
//! skill_file = "SKILL.md"
//! placeholder_marker = "TODO"
//! hint_reference = "references/common_issues.md"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SkillError};

/// Tunable constants used by [`SkillChecker`](crate::SkillChecker).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    /// Filename looked up when the checked path is a directory.
    pub skill_file: String,

    /// Token that marks unfinished instructions in the body. Matched
    /// case-insensitively.
    pub placeholder_marker: String,

    /// Troubleshooting reference printed when a report has warnings or
    /// errors.
    pub hint_reference: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            skill_file: "SKILL.md".into(),
            placeholder_marker: "TODO".into(),
            hint_reference: "references/common_issues.md".into(),
        }
    }
}

impl CheckerConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| SkillError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SkillError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        tracing::debug!(path = %path.display(), ?config, "checker config loaded");
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
