//! Integration tests for the clawcheck-skills crate.
//!
//! These tests write skill directories to disk and run the full check
//! pipeline: locate, parse, field checks, gating checks, body checks.

use std::path::{Path, PathBuf};

use clawcheck_skills::{CheckerConfig, Finding, JsonReport, SkillChecker, render_text};

/// Write `content` as `SKILL.md` inside a fresh skill directory.
fn write_skill(root: &Path, name: &str, content: &str) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("SKILL.md"), content).unwrap();
    dir
}

fn messages(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.message.as_str()).collect()
}

const MINIMAL: &str = "---\nname: foo\ndescription: bar\n---\nDo the foo thing with bar.\n";

// ═══════════════════════════════════════════════════════════════════════
//  Structural failures
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn missing_skill_file_is_single_error() {
    let tmp = tempfile::tempdir().unwrap();
    let result = SkillChecker::default().check_path(tmp.path());

    assert!(!result.passed());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("SKILL.md not found"));
    assert!(result.info.is_empty());
    assert!(result.warnings.is_empty());
    assert!(result.skill_file.is_none());
}

#[test]
fn missing_opening_delimiter_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = write_skill(tmp.path(), "plain", "name: foo\n\nJust markdown.\n");

    let result = SkillChecker::default().check_path(&dir);
    assert!(!result.passed());
    assert_eq!(
        messages(&result.errors),
        vec!["SKILL.md must start with YAML frontmatter (---)"]
    );
    assert_eq!(messages(&result.info), vec!["SKILL.md found"]);
}

#[test]
fn single_delimiter_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = write_skill(tmp.path(), "open", "---\nname: foo\ndescription: bar\n");

    let result = SkillChecker::default().check_path(&dir);
    assert!(!result.passed());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("Must start and end with ---"));
}

#[test]
fn undecodable_frontmatter_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = write_skill(tmp.path(), "bad-yaml", "---\nname: foo\n  bad: [\n---\nbody\n");

    let result = SkillChecker::default().check_path(&dir);
    assert!(!result.passed());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.starts_with("YAML parsing error"));
    assert!(result.warnings.is_empty());
}

#[test]
fn non_utf8_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("binary");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("SKILL.md"), [0xff, 0xfe, 0x00, 0x2d]).unwrap();

    let result = SkillChecker::default().check_path(&dir);
    assert!(!result.passed());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.starts_with("error reading"));
}

// ═══════════════════════════════════════════════════════════════════════
//  Field checks
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn empty_frontmatter_fails_required_fields() {
    let result = SkillChecker::default().check_content("---\n---\nbody");

    assert!(!result.passed());
    assert_eq!(
        messages(&result.errors),
        vec![
            "Missing required field: 'name'",
            "Missing required field: 'description'"
        ]
    );
}

#[test]
fn minimal_skill_passes() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = write_skill(tmp.path(), "foo", MINIMAL);

    let result = SkillChecker::default().check_path(&dir);
    assert!(result.passed(), "unexpected errors: {:?}", result.errors);
    assert_eq!(result.skill_file, Some(dir.join("SKILL.md")));

    let info = messages(&result.info);
    assert!(info.contains(&"Required field 'name' present"));
    assert!(info.contains(&"Required field 'description' present"));
    assert!(info.contains(&"SKILL.md body has 6 words"));
}

#[test]
fn minimal_skill_without_metadata_is_clean() {
    let checker = SkillChecker::default();
    let result = checker.check_content("---\nname: foo\ndescription: bar\n---\nDo the thing.\n");

    assert!(result.passed());
    assert!(result.warnings.is_empty(), "unexpected warnings: {:?}", result.warnings);

    let text = render_text(&result, Path::new("foo"), &checker.config().hint_reference);
    assert!(!text.contains(&checker.config().hint_reference));
}

#[test]
fn metadata_without_openclaw_warns() {
    let result = SkillChecker::default()
        .check_content("---\nname: foo\ndescription: bar\nmetadata:\n  author: me\n---\nDo the thing.\n");

    assert!(result.passed());
    assert_eq!(
        messages(&result.warnings),
        vec!["No metadata.openclaw found. Skill is always eligible (no gating)."]
    );
}

#[test]
fn file_path_is_accepted_directly() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = write_skill(tmp.path(), "foo", MINIMAL);

    let result = SkillChecker::default().check_path(&dir.join("SKILL.md"));
    assert!(result.passed());
    assert_eq!(result.skill_file, Some(dir.join("SKILL.md")));
}

#[test]
fn checks_are_cumulative() {
    let content = "---\n\
                   description: no name here\n\
                   user-invocable: maybe\n\
                   metadata:\n  openclaw:\n    os: [beos]\n    install:\n      - kind: brew\n\
                   ---\n";
    let result = SkillChecker::default().check_content(content);

    assert_eq!(
        messages(&result.errors),
        vec![
            "Missing required field: 'name'",
            "Invalid OS value: 'beos'. Valid: [darwin, linux, win32]",
            "brew install[0] missing required field: 'formula'",
            "brew install[0] missing required field: 'bins'",
            "brew install[0] missing required field: 'label'",
        ]
    );
    assert_eq!(
        messages(&result.warnings),
        vec![
            "'user-invocable' should be boolean (true/false), got: maybe",
            "SKILL.md body is empty. Add instructions for using this skill.",
        ]
    );
}

// ═══════════════════════════════════════════════════════════════════════
//  Gating metadata
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn invalid_os_is_the_only_error() {
    let content = "---\nname: foo\ndescription: bar\nmetadata:\n  openclaw:\n    os: [darwin, plan9]\n---\nBody text.\n";
    let result = SkillChecker::default().check_content(content);

    assert!(!result.passed());
    assert!(messages(&result.info).contains(&"os filter: darwin"));
    assert_eq!(
        messages(&result.errors),
        vec!["Invalid OS value: 'plan9'. Valid: [darwin, linux, win32]"]
    );
}

#[test]
fn complete_brew_installer() {
    let content = "---\nname: foo\ndescription: bar\nmetadata:\n  openclaw:\n    install:\n      - {kind: brew, formula: x, bins: [x], label: X}\n---\nBody text.\n";
    let result = SkillChecker::default().check_content(content);

    assert!(result.passed(), "unexpected errors: {:?}", result.errors);
    let info = messages(&result.info);
    for field in ["formula", "bins", "label"] {
        let expected = format!("brew install[0].{field} present");
        assert!(info.contains(&expected.as_str()), "missing {expected}");
    }
}

#[test]
fn download_without_url_still_passes() {
    let content = "---\nname: foo\ndescription: bar\nmetadata:\n  openclaw:\n    install:\n      - {kind: download}\n---\nBody text.\n";
    let result = SkillChecker::default().check_content(content);

    assert!(result.passed());
    assert_eq!(
        messages(&result.warnings),
        vec!["download install[0] missing 'url' field"]
    );
}

#[test]
fn full_featured_skill() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = write_skill(
        tmp.path(),
        "weather-cli",
        r#"---
name: weather-cli
description: Look up weather forecasts from the command line.
user-invocable: true
command-dispatch: tool
command-tool: weather
metadata:
  openclaw:
    emoji: "check"
    homepage: https://github.com/example/weather-cli
    primaryEnv: WEATHER_API_KEY
    requires:
      env: [WEATHER_API_KEY]
      bins:
        - curl
        - jq
      anyBins: []
    os: [darwin, linux]
    install:
      - kind: brew
        formula: jq
        bins: [jq]
        label: Install jq (brew)
      - kind: download
        url: https://example.com/weather.tar.gz
---

# Weather CLI

Use `curl` against the forecast API to fetch current conditions.

---

Locations are identified by city name.
"#,
    );

    let result = SkillChecker::default().check_path(&dir);
    assert!(result.passed(), "unexpected errors: {:?}", result.errors);
    assert!(result.warnings.is_empty(), "unexpected warnings: {:?}", result.warnings);

    let info = messages(&result.info);
    assert!(info.contains(&"metadata.openclaw.primaryEnv present"));
    assert!(info.contains(&"requires.bins defined (2 items)"));
    assert!(info.contains(&"requires.anyBins defined (0 items)"));
    assert!(info.contains(&"metadata.openclaw.install defined (2 installers)"));
    assert!(info.contains(&"download install[1].url present"));
    assert!(info.contains(&"Optional field 'user-invocable' present (value: true)"));
}

// ═══════════════════════════════════════════════════════════════════════
//  Configuration, reports, determinism
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn custom_placeholder_marker() {
    let content = "---\nname: foo\ndescription: bar\n---\nFIXME: write this.\nTODO too.\n";
    let checker = SkillChecker::new(CheckerConfig {
        placeholder_marker: "fixme".into(),
        ..CheckerConfig::default()
    });

    let result = checker.check_content(content);
    let placeholder: Vec<&str> = messages(&result.warnings)
        .into_iter()
        .filter(|m| m.starts_with("SKILL.md contains"))
        .collect();
    assert_eq!(
        placeholder,
        vec!["SKILL.md contains fixme items. Complete before publishing."]
    );
}

#[test]
fn validation_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = write_skill(
        tmp.path(),
        "mixed",
        "---\nname: foo\nmetadata:\n  openclaw:\n    os: [linux, haiku]\n    requires:\n      gpu: [cuda]\n---\nTODO\n",
    );

    let checker = SkillChecker::default();
    let first = checker.check_path(&dir);
    let second = checker.check_path(&dir);
    assert_eq!(first, second);
    assert_eq!(first.passed(), second.passed());
}

#[test]
fn reports_render_both_formats() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = write_skill(tmp.path(), "foo", "---\nname: foo\n---\n");

    let checker = SkillChecker::default();
    let result = checker.check_path(&dir);

    let text = render_text(&result, &dir, &checker.config().hint_reference);
    assert!(text.contains("Errors:\n  [x] Missing required field: 'description'"));
    assert!(text.contains("FAILED"));
    assert!(text.contains("See references/common_issues.md"));

    let json = serde_json::to_value(JsonReport::new(&result)).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["errors"][0]["severity"], "error");
}
