//! Manifest validation over raw, untrusted sources.
//!
//! Every rule is checked and every violation is collected; a broken source
//! never stops the rest of the batch from being validated.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::error::{OpenVerbError, Result};
use crate::verb::VerbId;

/// A single rule violation attributed to a manifest source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Source name (file name for directory runs).
    pub source: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

/// Outcome of validating one manifest source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub name: String,
    /// Family name when the `family` field was usable.
    pub family: Option<String>,
    /// Whether `family`, `version` and `verbs` were all well formed.
    pub well_formed: bool,
    /// Number of entries in the `verbs` array.
    pub declared_verbs: usize,
    /// Verbs that carried a usable `id` and were checked against the per-verb rules.
    pub verbs_checked: usize,
    pub violations: Vec<Violation>,
}

impl SourceReport {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            family: None,
            well_formed: false,
            declared_verbs: 0,
            verbs_checked: 0,
            violations: Vec::new(),
        }
    }

    fn fail(&mut self, message: impl Into<String>) {
        self.violations.push(Violation {
            source: self.name.clone(),
            message: message.into(),
        });
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Final verdict of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// At least one source and zero violations.
    Valid,
    /// One or more violations.
    Invalid,
    /// Nothing to validate.
    NoSources,
}

impl ValidationOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            ValidationOutcome::Valid => 0,
            ValidationOutcome::Invalid | ValidationOutcome::NoSources => 1,
        }
    }
}

/// One human-readable report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Pass(String),
    Fail(String),
    Summary(String),
}

impl ReportLine {
    pub fn is_failure(&self) -> bool {
        matches!(self, ReportLine::Fail(_))
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Pass(text) => write!(f, "  OK    {text}"),
            ReportLine::Fail(text) => write!(f, "  FAIL  {text}"),
            ReportLine::Summary(text) => f.write_str(text),
        }
    }
}

/// Aggregate report over a batch of sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub sources: Vec<SourceReport>,
    /// Distinct families whose manifest had well-formed `family`, `version` and `verbs`.
    pub families: usize,
    pub verbs_checked: usize,
}

impl ValidationReport {
    pub fn violations(&self) -> Vec<&Violation> {
        self.sources
            .iter()
            .flat_map(|source| source.violations.iter())
            .collect()
    }

    pub fn violation_count(&self) -> usize {
        self.sources
            .iter()
            .map(|source| source.violations.len())
            .sum()
    }

    pub fn outcome(&self) -> ValidationOutcome {
        if self.sources.is_empty() {
            ValidationOutcome::NoSources
        } else if self.violation_count() > 0 {
            ValidationOutcome::Invalid
        } else {
            ValidationOutcome::Valid
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.outcome().exit_code()
    }

    /// Per-source pass/fail lines followed by the summary.
    pub fn render(&self) -> Vec<ReportLine> {
        if self.sources.is_empty() {
            return vec![ReportLine::Fail("No manifest files found".to_string())];
        }

        let mut lines = Vec::new();
        for source in &self.sources {
            if source.passed() {
                lines.push(ReportLine::Pass(format!(
                    "{} - {} ({} verbs)",
                    source.name,
                    source.family.as_deref().unwrap_or("?"),
                    source.declared_verbs
                )));
            } else {
                lines.extend(
                    source
                        .violations
                        .iter()
                        .map(|violation| ReportLine::Fail(violation.to_string())),
                );
            }
        }
        lines.push(ReportLine::Summary(format!(
            "{} families, {} verbs validated across {} files.",
            self.families,
            self.verbs_checked,
            self.sources.len()
        )));
        let errors = self.violation_count();
        if errors > 0 {
            lines.push(ReportLine::Summary(format!("{errors} error(s) found.")));
        } else {
            lines.push(ReportLine::Summary("All manifests valid.".to_string()));
        }
        lines
    }
}

/// Validate one raw manifest source.
pub fn validate_source(name: &str, raw: &str) -> SourceReport {
    let mut report = SourceReport::new(name);

    let manifest: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(error) => {
            report.fail(format!("Invalid JSON: {error}"));
            return report;
        }
    };

    let family = non_empty_str(manifest.get("family"));
    if family.is_none() {
        report.fail("Missing or invalid \"family\" field");
    }
    report.family = family.map(str::to_string);

    let version_ok = non_empty_str(manifest.get("version")).is_some();
    if !version_ok {
        report.fail("Missing or invalid \"version\" field");
    }

    let verbs = match manifest.get("verbs").and_then(Value::as_array) {
        Some(verbs) if !verbs.is_empty() => verbs,
        _ => {
            report.fail("Missing or empty \"verbs\" array");
            return report;
        }
    };
    report.declared_verbs = verbs.len();
    report.well_formed = family.is_some() && version_ok;

    for (index, verb) in verbs.iter().enumerate() {
        let Some(id) = non_empty_str(verb.get("id")) else {
            report.fail(format!("Verb #{index} missing \"id\""));
            continue;
        };

        match family {
            Some(family) if !VerbId::from(id).belongs_to(family) => report.fail(format!(
                "Verb \"{id}\" does not start with family \"{family}.\""
            )),
            // Without a usable family no id can carry the right prefix.
            None => report.fail(format!(
                "Verb \"{id}\" does not start with a valid family prefix"
            )),
            _ => {}
        }

        if !is_present(verb.get("version")) {
            report.fail(format!("Verb \"{id}\" missing \"version\""));
        }
        if non_empty_str(verb.get("summary")).is_none() {
            report.fail(format!("Verb \"{id}\" missing \"summary\""));
        }
        if !declares_object(verb.get("input")) {
            report.fail(format!(
                "Verb \"{id}\" input must be {{ type: \"object\", ... }}"
            ));
        }
        if !declares_object(verb.get("output")) {
            report.fail(format!(
                "Verb \"{id}\" output must be {{ type: \"object\", ... }}"
            ));
        }

        report.verbs_checked += 1;
    }

    report
}

/// Accumulates source reports into a [`ValidationReport`].
#[derive(Default)]
struct Batch {
    report: ValidationReport,
    first_seen: HashMap<String, String>,
}

impl Batch {
    fn push(&mut self, mut source: SourceReport) {
        let mut repeated = false;
        if let Some(family) = source.family.clone() {
            match self.first_seen.get(&family) {
                Some(original) => {
                    let original = original.clone();
                    source.fail(format!("Family \"{family}\" already declared by {original}"));
                    repeated = true;
                }
                None => {
                    self.first_seen.insert(family, source.name.clone());
                }
            }
        }

        tracing::debug!(
            source = %source.name,
            violations = source.violations.len(),
            "validated manifest source"
        );
        if source.well_formed && !repeated {
            self.report.families += 1;
        }
        self.report.verbs_checked += source.verbs_checked;
        self.report.sources.push(source);
    }

    fn finish(self) -> ValidationReport {
        let report = self.report;
        tracing::info!(
            families = report.families,
            verbs = report.verbs_checked,
            violations = report.violation_count(),
            "manifest validation finished"
        );
        report
    }
}

/// Validate a batch of `(name, raw)` sources.
///
/// A family declared by an earlier source is a violation of every later one.
pub fn validate_sources<I, N, S>(sources: I) -> ValidationReport
where
    I: IntoIterator<Item = (N, S)>,
    N: AsRef<str>,
    S: AsRef<str>,
{
    let mut batch = Batch::default();
    for (name, raw) in sources {
        batch.push(validate_source(name.as_ref(), raw.as_ref()));
    }
    batch.finish()
}

/// Validate every `*.json` file in `dir`, in file-name order.
///
/// Failing to list the directory is an error; an unreadable file is reported
/// as a violation of that source.
pub fn validate_dir(dir: &Path) -> Result<ValidationReport> {
    let io_error = |source| OpenVerbError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    let mut batch = Batch::default();
    for path in files {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let source = match std::fs::read_to_string(&path) {
            Ok(raw) => validate_source(&name, &raw),
            Err(error) => {
                let mut source = SourceReport::new(&name);
                source.fail(format!("Unreadable file: {error}"));
                source
            }
        };
        batch.push(source);
    }
    Ok(batch.finish())
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Present means set to something other than `null`, `false` or `""`.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

fn declares_object(schema: Option<&Value>) -> bool {
    schema
        .and_then(|schema| schema.get("type"))
        .and_then(Value::as_str)
        == Some("object")
}

#[cfg(test)]
mod tests;
