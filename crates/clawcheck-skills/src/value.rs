//! Small helpers for inspecting decoded YAML values.

use serde_yaml::Value;

/// Truthiness of a frontmatter value.
///
/// Null, `false`, zero, and empty strings, lists, and mappings are falsy;
/// everything else is truthy. Tagged values defer to their inner value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// Human-readable name of a value's type, used in findings.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Render a value on a single line for inclusion in a finding.
///
/// Strings are shown bare; everything else is shown in JSON notation.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| type_name(other).to_owned()),
    }
}

/// Format a list of allowed values as `[a, b, c]`.
pub fn list_display(values: &[&str]) -> String {
    format!("[{}]", values.join(", "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
