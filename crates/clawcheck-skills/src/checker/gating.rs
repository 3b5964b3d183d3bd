//! Checks for `metadata.openclaw`, the gating and installer block.
//!
//! ```yaml
//! metadata:
//!   openclaw:
//!     emoji: "🦀"
//!     requires:
//!       bins: [cargo]
//!       env: [CRATES_TOKEN]
//!     os: [darwin, linux]
//!     install:
//!       - kind: brew
//!         formula: rust
//!         bins: [cargo]
//!         label: Install Rust (brew)
//! ```
//!
//! A `metadata` mapping without an `openclaw` block leaves the skill eligible
//! everywhere, which only warrants a warning; a skill with no `metadata` at
//! all is not flagged. Unknown `requires` keys also only warn, but an unknown
//! installer `kind` is an error since the kind decides how the entry is read.

use serde_yaml::{Mapping, Sequence, Value};

use crate::types::ValidationResult;
use crate::value::{list_display, render, type_name};

/// Presence-only fields of `metadata.openclaw`.
const SIMPLE_FIELDS: &[&str] = &["emoji", "homepage", "primaryEnv", "skillKey"];

/// Recognised keys of `metadata.openclaw.requires`; each must hold a list.
const REQUIRES_FIELDS: &[&str] = &["bins", "anyBins", "env", "config"];

/// Platform identifiers accepted in `metadata.openclaw.os`.
pub const VALID_OS: &[&str] = &["darwin", "linux", "win32"];

/// Installer kinds accepted in `metadata.openclaw.install[].kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallerKind {
    Brew,
    Node,
    Go,
    Download,
}

impl InstallerKind {
    pub const ALL: [InstallerKind; 4] = [Self::Brew, Self::Node, Self::Go, Self::Download];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brew => "brew",
            Self::Node => "node",
            Self::Go => "go",
            Self::Download => "download",
        }
    }

    pub fn parse(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == kind)
    }

    fn valid_display() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(InstallerKind::as_str).collect();
        list_display(&names)
    }
}

/// Validate `metadata` and its nested `openclaw` block.
///
/// Nothing is recorded when the frontmatter has no `metadata` key.
pub fn check_gating_metadata(frontmatter: &Mapping, result: &mut ValidationResult) {
    let openclaw = match frontmatter.get("metadata") {
        None => return,
        Some(Value::Mapping(metadata)) => metadata.get("openclaw"),
        Some(other) => {
            result.error(format!(
                "metadata must be a mapping, got: {}",
                type_name(other)
            ));
            return;
        }
    };

    let Some(openclaw) = openclaw else {
        result.warning("No metadata.openclaw found. Skill is always eligible (no gating).");
        return;
    };

    let Value::Mapping(openclaw) = openclaw else {
        result.error(format!(
            "metadata.openclaw must be a mapping, got: {}",
            type_name(openclaw)
        ));
        return;
    };
    result.info("metadata.openclaw found");

    for field in SIMPLE_FIELDS {
        if openclaw.contains_key(*field) {
            result.info(format!("metadata.openclaw.{field} present"));
        }
    }

    if let Some(requires) = openclaw.get("requires") {
        check_requires(requires, result);
    }
    if let Some(os) = openclaw.get("os") {
        check_os(os, result);
    }
    if let Some(install) = openclaw.get("install") {
        check_install(install, result);
    }
}

fn check_requires(requires: &Value, result: &mut ValidationResult) {
    let Value::Mapping(requires) = requires else {
        result.error(format!(
            "metadata.openclaw.requires must be a mapping, got: {}",
            type_name(requires)
        ));
        return;
    };
    result.info("metadata.openclaw.requires present");

    for (key, value) in requires {
        let field = render(key);
        if !REQUIRES_FIELDS.contains(&field.as_str()) || !key.is_string() {
            result.warning(format!("Unknown requires field: '{field}'"));
            continue;
        }

        match value {
            Value::Sequence(items) => {
                result.info(format!("requires.{field} defined ({} items)", items.len()));
            }
            other => result.error(format!(
                "requires.{field} must be a list, got: {}",
                type_name(other)
            )),
        }
    }
}

fn check_os(os: &Value, result: &mut ValidationResult) {
    let Value::Sequence(platforms) = os else {
        result.error(format!(
            "metadata.openclaw.os must be a list, got: {}",
            type_name(os)
        ));
        return;
    };

    for platform in platforms {
        match platform.as_str() {
            Some(name) if VALID_OS.contains(&name) => {
                result.info(format!("os filter: {name}"));
            }
            _ => result.error(format!(
                "Invalid OS value: '{}'. Valid: {}",
                render(platform),
                list_display(VALID_OS)
            )),
        }
    }
}

fn check_install(install: &Value, result: &mut ValidationResult) {
    let Value::Sequence(installers) = install else {
        result.error(format!(
            "metadata.openclaw.install must be a list, got: {}",
            type_name(install)
        ));
        return;
    };
    result.info(format!(
        "metadata.openclaw.install defined ({} installers)",
        installers.len()
    ));

    check_installers(installers, result);
}

fn check_installers(installers: &Sequence, result: &mut ValidationResult) {
    for (idx, installer) in installers.iter().enumerate() {
        let Value::Mapping(installer) = installer else {
            result.error(format!(
                "install[{idx}] must be a mapping, got: {}",
                type_name(installer)
            ));
            continue;
        };

        let Some(kind) = installer.get("kind") else {
            result.error(format!("install[{idx}] missing 'kind' field"));
            continue;
        };

        match kind.as_str().and_then(InstallerKind::parse) {
            Some(kind) => {
                result.info(format!("install[{idx}] kind: {}", kind.as_str()));
                check_installer_fields(kind, installer, idx, result);
            }
            None => result.error(format!(
                "install[{idx}] invalid kind: '{}'. Valid: {}",
                render(kind),
                InstallerKind::valid_display()
            )),
        }
    }
}

fn check_installer_fields(
    kind: InstallerKind,
    installer: &Mapping,
    idx: usize,
    result: &mut ValidationResult,
) {
    match kind {
        InstallerKind::Brew => {
            for field in ["formula", "bins", "label"] {
                if installer.contains_key(field) {
                    result.info(format!("brew install[{idx}].{field} present"));
                } else {
                    result.error(format!(
                        "brew install[{idx}] missing required field: '{field}'"
                    ));
                }
            }
        }
        InstallerKind::Node | InstallerKind::Go => {
            if installer.contains_key("bins") {
                result.info(format!("{} install[{idx}].bins present", kind.as_str()));
            }
        }
        InstallerKind::Download => {
            if installer.contains_key("url") {
                result.info(format!("download install[{idx}].url present"));
            } else {
                result.warning(format!("download install[{idx}] missing 'url' field"));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
