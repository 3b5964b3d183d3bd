//! SKILL.md parser — splits the YAML frontmatter from the markdown body.
//!
//! A SKILL.md file consists of:
//! 1. YAML frontmatter opened and closed by `---`.
//! 2. Markdown body containing instructions for the LLM.
//!
//! ```text
//! ---
//! name: my-skill
//! description: Does something useful.
//! metadata:
//!   openclaw:
//!     requires:
//!       bins: [curl]
//!     os: [darwin, linux]
//! ---
//!
//! # My Skill
//!
//! Instructions for the LLM go here...
//! ```
//!
//! The file is split on the first two occurrences of `---`; any later
//! occurrence (a markdown rule, say) stays in the body.

use serde_yaml::{Mapping, Value};

use crate::error::{Result, SkillError};
use crate::value::type_name;

/// Frontmatter delimiter token.
pub const DELIMITER: &str = "---";

/// A SKILL.md file split into decoded frontmatter and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Top-level frontmatter mapping. Empty when the block is empty.
    pub frontmatter: Mapping,

    /// The markdown body, trimmed.
    pub body: String,
}

/// Split a SKILL.md file into raw frontmatter text and body.
///
/// Returns `(yaml_str, markdown_body)`, both trimmed, or `None` when the
/// content does not contain an opening and closing delimiter.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix(DELIMITER)?;
    let (yaml, body) = rest.split_once(DELIMITER)?;
    Some((yaml.trim(), body.trim()))
}

/// Parse SKILL.md text into frontmatter and body.
///
/// Fails when the text does not open with `---`, when the closing `---` is
/// missing, when the frontmatter is not valid YAML, or when it decodes to
/// something other than a mapping. An empty frontmatter block decodes to an
/// empty mapping.
pub fn parse_document(content: &str) -> Result<ParsedDocument> {
    if !content.starts_with(DELIMITER) {
        return Err(SkillError::InvalidFormat(
            "SKILL.md must start with YAML frontmatter (---)".into(),
        ));
    }

    let (yaml_str, body) = split_frontmatter(content).ok_or_else(|| {
        SkillError::InvalidFormat("Invalid frontmatter format. Must start and end with ---".into())
    })?;

    let frontmatter = decode_frontmatter(yaml_str)?;
    tracing::debug!(
        keys = frontmatter.len(),
        body_len = body.len(),
        "parsed frontmatter"
    );

    Ok(ParsedDocument {
        frontmatter,
        body: body.to_owned(),
    })
}

fn decode_frontmatter(yaml_str: &str) -> Result<Mapping> {
    if yaml_str.is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(yaml_str)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(map) => Ok(map),
        other => Err(SkillError::InvalidFormat(format!(
            "frontmatter must be a mapping, got: {}",
            type_name(&other)
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
