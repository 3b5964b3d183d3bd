//! Console and JSON rendering of a [`ValidationResult`].

use std::fmt::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::types::{Finding, ValidationResult};

const RULE_WIDTH: usize = 60;

/// Render the human-readable report for a run.
///
/// Sections with no findings are left out. A hint pointing at
/// `hint_reference` is appended whenever there is anything to fix.
pub fn render_text(result: &ValidationResult, target: &Path, hint_reference: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, result, target, hint_reference);
    out
}

fn write_text(
    out: &mut String,
    result: &ValidationResult,
    target: &Path,
    hint_reference: &str,
) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "Validating OpenClaw skill: {}", target.display())?;
    writeln!(out)?;
    writeln!(out, "{rule}")?;

    write_section(out, "Information", &result.info)?;
    write_section(out, "Warnings", &result.warnings)?;
    write_section(out, "Errors", &result.errors)?;

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    writeln!(
        out,
        "Summary: {} info, {} warnings, {} errors",
        result.info.len(),
        result.warnings.len(),
        result.errors.len()
    )?;

    if result.passed() {
        writeln!(out, "Skill validation PASSED!")?;
    } else {
        writeln!(out, "Skill validation FAILED. Fix errors and re-validate.")?;
    }

    if !result.errors.is_empty() || !result.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "See {hint_reference} for help with common issues.")?;
    }

    Ok(())
}

fn write_section(out: &mut String, title: &str, findings: &[Finding]) -> fmt::Result {
    if findings.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{title}:")?;
    for finding in findings {
        writeln!(out, "  {finding}")?;
    }
    Ok(())
}

/// Machine-readable form of a run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub passed: bool,
    #[serde(flatten)]
    pub result: &'a ValidationResult,
}

impl<'a> JsonReport<'a> {
    pub fn new(result: &'a ValidationResult) -> Self {
        Self {
            passed: result.passed(),
            result,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
