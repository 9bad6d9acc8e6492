use serde_json::{json, Value};
use tempfile::tempdir;

use super::*;

fn verb(id: &str) -> Value {
    json!({
        "id": id,
        "version": "1.0.0",
        "summary": format!("Run {id}"),
        "input": {"type": "object"},
        "output": {"type": "object"}
    })
}

fn manifest(family: &str, verbs: Vec<Value>) -> String {
    json!({"family": family, "version": "1.0.0", "verbs": verbs}).to_string()
}

#[test]
fn well_formed_manifest_has_no_violations() {
    let raw = manifest("ui.theme", vec![verb("ui.theme.get"), verb("ui.theme.set")]);
    let report = validate_source("ui.theme.json", &raw);
    assert!(report.passed(), "{:?}", report.violations);
    assert!(report.well_formed);
    assert_eq!(report.verbs_checked, 2);
    assert_eq!(report.family.as_deref(), Some("ui.theme"));
}

#[test]
fn invalid_json_is_reported_and_skipped() {
    let report = validate_source("broken.json", "{ \"family\": ");
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0].message.starts_with("Invalid JSON"));
    assert!(!report.well_formed);
    assert_eq!(report.verbs_checked, 0);
}

#[test]
fn mismatched_prefix_reports_one_violation_and_keeps_checking() {
    let raw = manifest(
        "ui.nav",
        vec![verb("ui.search.go"), verb("ui.nav.back")],
    );
    let report = validate_source("ui.nav.json", &raw);
    assert_eq!(report.violations.len(), 1, "{:?}", report.violations);
    assert_eq!(
        report.violations[0].message,
        "Verb \"ui.search.go\" does not start with family \"ui.nav.\""
    );
    assert_eq!(report.verbs_checked, 2);
}

#[test]
fn prefix_must_end_at_a_dot() {
    let raw = manifest("ui.nav", vec![verb("ui.navigate")]);
    let report = validate_source("ui.nav.json", &raw);
    assert_eq!(report.violations.len(), 1);
}

#[test]
fn missing_top_level_fields_accumulate() {
    let raw = json!({"verbs": [verb("x.y")]}).to_string();
    let report = validate_source("anon.json", &raw);
    let messages: Vec<&str> = report
        .violations
        .iter()
        .map(|violation| violation.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Missing or invalid \"family\" field",
            "Missing or invalid \"version\" field",
            "Verb \"x.y\" does not start with a valid family prefix",
        ]
    );
    assert!(!report.well_formed);
    assert_eq!(report.verbs_checked, 1);
}

#[test]
fn empty_verbs_skips_per_verb_checks() {
    let raw = json!({"family": "ui.toast", "version": "1.0.0", "verbs": []}).to_string();
    let report = validate_source("ui.toast.json", &raw);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].message, "Missing or empty \"verbs\" array");
    assert!(!report.well_formed);
}

#[test]
fn verb_without_id_skips_only_that_verb() {
    let raw = manifest(
        "ui.modal",
        vec![json!({"summary": "no id"}), verb("ui.modal.open")],
    );
    let report = validate_source("ui.modal.json", &raw);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].message, "Verb #0 missing \"id\"");
    assert_eq!(report.verbs_checked, 1);
}

#[test]
fn every_per_verb_rule_is_reported() {
    let raw = manifest(
        "ui.form",
        vec![json!({
            "id": "ui.form.fill",
            "summary": "",
            "input": {"type": "array"}
        })],
    );
    let report = validate_source("ui.form.json", &raw);
    let messages: Vec<&str> = report
        .violations
        .iter()
        .map(|violation| violation.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Verb \"ui.form.fill\" missing \"version\"",
            "Verb \"ui.form.fill\" missing \"summary\"",
            "Verb \"ui.form.fill\" input must be { type: \"object\", ... }",
            "Verb \"ui.form.fill\" output must be { type: \"object\", ... }",
        ]
    );
}

#[test]
fn broken_source_does_not_stop_the_batch() {
    let good = manifest("ui.theme", vec![verb("ui.theme.get")]);
    let report = validate_sources([
        ("a.json", "not json".to_string()),
        ("b.json", good),
    ]);
    assert_eq!(report.sources.len(), 2);
    assert!(report.sources[1].passed());
    assert_eq!(report.families, 1);
    assert_eq!(report.violation_count(), 1);
    assert_eq!(report.outcome(), ValidationOutcome::Invalid);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn repeated_family_across_sources_is_a_violation() {
    let report = validate_sources([
        ("one.json", manifest("ui.theme", vec![verb("ui.theme.get")])),
        ("two.json", manifest("ui.theme", vec![verb("ui.theme.set")])),
    ]);
    assert!(report.sources[0].passed());
    assert_eq!(
        report.sources[1].violations,
        vec![Violation {
            source: "two.json".to_string(),
            message: "Family \"ui.theme\" already declared by one.json".to_string(),
        }]
    );
    assert_eq!(report.families, 1);
    assert_eq!(report.verbs_checked, 2);
    assert_eq!(report.outcome(), ValidationOutcome::Invalid);

    let lines: Vec<String> = report.render().iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "  OK    one.json - ui.theme (1 verbs)",
            "  FAIL  two.json: Family \"ui.theme\" already declared by one.json",
            "1 families, 2 verbs validated across 2 files.",
            "1 error(s) found.",
        ]
    );
}

#[test]
fn no_sources_is_its_own_outcome() {
    let report = validate_sources(Vec::<(String, String)>::new());
    assert_eq!(report.outcome(), ValidationOutcome::NoSources);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(
        report.render(),
        vec![ReportLine::Fail("No manifest files found".to_string())]
    );
}

#[test]
fn render_lists_sources_then_summary() {
    let report = validate_sources([
        ("ui.nav.json", manifest("ui.nav", vec![verb("ui.nav.go")])),
        ("bad.json", "[]".to_string()),
    ]);
    let lines: Vec<String> = report.render().iter().map(ToString::to_string).collect();
    assert_eq!(lines[0], "  OK    ui.nav.json - ui.nav (1 verbs)");
    assert!(lines[1].starts_with("  FAIL  bad.json: Missing or invalid \"family\""));
    assert_eq!(
        lines[lines.len() - 2],
        "1 families, 1 verbs validated across 2 files."
    );
    assert_eq!(lines[lines.len() - 1], "3 error(s) found.");
}

#[test]
fn validate_dir_reads_json_files_in_name_order() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("b.json"),
        manifest("ui.nav", vec![verb("ui.nav.go")]),
    )
    .expect("write b");
    std::fs::write(
        dir.path().join("a.json"),
        manifest("ui.theme", vec![verb("ui.theme.get")]),
    )
    .expect("write a");
    std::fs::write(dir.path().join("notes.txt"), "ignored").expect("write txt");

    let report = validate_dir(dir.path()).expect("validate dir");
    let names: Vec<&str> = report.sources.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["a.json", "b.json"]);
    assert_eq!(report.outcome(), ValidationOutcome::Valid);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn unreadable_file_keeps_its_name_order() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("a.json"),
        manifest("ui.theme", vec![verb("ui.theme.get")]),
    )
    .expect("write a");
    // Not UTF-8, so it cannot be read as text.
    std::fs::write(dir.path().join("b.json"), [0xff, 0xfe, 0x00]).expect("write b");
    std::fs::write(
        dir.path().join("c.json"),
        manifest("ui.nav", vec![verb("ui.nav.go")]),
    )
    .expect("write c");

    let report = validate_dir(dir.path()).expect("validate dir");
    let names: Vec<&str> = report.sources.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
    assert!(report.sources[1].violations[0]
        .message
        .starts_with("Unreadable file:"));
    assert_eq!(report.families, 2);

    let lines: Vec<String> = report.render().iter().map(ToString::to_string).collect();
    assert!(lines[1].starts_with("  FAIL  b.json: Unreadable file:"));
    assert_eq!(lines[2], "  OK    c.json - ui.nav (1 verbs)");
}

#[test]
fn validate_dir_is_idempotent() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("ui.nav.json"),
        manifest("ui.nav", vec![verb("ui.search.go")]),
    )
    .expect("write manifest");

    let first = validate_dir(dir.path()).expect("first run");
    let second = validate_dir(dir.path()).expect("second run");
    assert_eq!(first, second);
    assert_eq!(first.render(), second.render());
    assert_eq!(first.exit_code(), second.exit_code());
}

#[test]
fn empty_dir_has_no_sources() {
    let dir = tempdir().expect("tempdir");
    let report = validate_dir(dir.path()).expect("validate dir");
    assert_eq!(report.outcome(), ValidationOutcome::NoSources);
}

#[test]
fn missing_dir_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("nope");
    assert!(matches!(
        validate_dir(&missing),
        Err(OpenVerbError::Io { .. })
    ));
}
