//! Error types for skill checking.
//!
//! These cover the structural failures that stop a validation run early.
//! The checker turns them into error findings; only configuration loading
//! surfaces them to callers directly.

use std::path::PathBuf;

/// Skill-check errors.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("{name} not found at `{path}`. Each skill must have a {name} file.")]
    NotFound { name: String, path: PathBuf },

    #[error("{0}")]
    InvalidFormat(String),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("error reading `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in `{path}`: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkillError>;
