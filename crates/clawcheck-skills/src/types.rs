//! Finding and result types produced by a validation run.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Something was checked and found in order.
    Info,
    /// Advisory only; never affects the verdict.
    Warning,
    /// A schema violation; the skill fails validation.
    Error,
}

impl Severity {
    /// Short marker printed in front of each finding in text reports.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Info => "[+]",
            Self::Warning => "[!]",
            Self::Error => "[x]",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One reported observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.marker(), self.message)
    }
}

/// Everything a single validation run found.
///
/// Findings keep the order in which the checks produced them. The verdict
/// is derived: a skill passes exactly when no error was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// The resolved `SKILL.md` path, once located.
    pub skill_file: Option<PathBuf>,
    pub info: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub errors: Vec<Finding>,
}

impl ValidationResult {
    /// `true` iff no error finding was recorded.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn info(&mut self, message: impl Into<String>) {
        self.info.push(Finding {
            severity: Severity::Info,
            message: message.into(),
        });
    }

    pub(crate) fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(Finding {
            severity: Severity::Warning,
            message: message.into(),
        });
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(Finding {
            severity: Severity::Error,
            message: message.into(),
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
