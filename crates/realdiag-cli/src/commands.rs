//! Subcommand implementations. Each writes its report to `out`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use realdiag_analysis::likelihood::{to_fixed, what_if_impact, LikelihoodScorer};
use realdiag_core::config::{OutputFormat, RealdiagConfig};
use realdiag_core::errors::PayloadError;
use realdiag_core::types::{read_results, DiagnosticResult};

use crate::error::CliError;
use crate::report;

/// Read results from `input`, or stdin when `input` is `None` or `-`.
pub fn load_results(input: Option<&Path>) -> Result<Vec<DiagnosticResult>, PayloadError> {
    match input {
        Some(path) if path != Path::new("-") => {
            let name = path.display().to_string();
            let file = File::open(path).map_err(|source| PayloadError::Io {
                source_name: name.clone(),
                source,
            })?;
            read_results(file, &name)
        }
        _ => read_results(std::io::stdin().lock(), "<stdin>"),
    }
}

/// Score and rank every result in the payload.
pub fn rank<W: Write>(
    results: &[DiagnosticResult],
    config: &RealdiagConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let scorer = LikelihoodScorer::from_config(&config.scoring);
    let outcomes = scorer.score_batch(results);
    let include_trace = config.output.effective_include_trace();

    match config.output.effective_format() {
        OutputFormat::Table => report::write_table(out, &outcomes, include_trace)?,
        OutputFormat::Json => report::write_json(out, &outcomes, include_trace)?,
    }
    Ok(())
}

/// Explain the result whose label matches `label` (exact, then case-insensitive).
pub fn explain<W: Write>(
    results: &[DiagnosticResult],
    label: &str,
    config: &RealdiagConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let result = results
        .iter()
        .find(|r| r.label == label)
        .or_else(|| results.iter().find(|r| r.label.eq_ignore_ascii_case(label)))
        .ok_or_else(|| PayloadError::UnknownLabel {
            label: label.to_string(),
        })?;

    let outcome = LikelihoodScorer::from_config(&config.scoring).evaluate(result);
    match config.output.effective_format() {
        OutputFormat::Table => report::write_explanation(out, &outcome)?,
        OutputFormat::Json => report::write_json(out, std::slice::from_ref(&outcome), true)?,
    }
    Ok(())
}

/// Linear what-if estimate for removing findings.
pub fn what_if<W: Write>(
    likelihood: f64,
    findings: usize,
    remove: usize,
    out: &mut W,
) -> Result<(), CliError> {
    let decrease = what_if_impact(Some(likelihood), findings, remove);
    writeln!(
        out,
        "Removing {remove} of {findings} finding(s): -{} points ({}% -> {}%)",
        to_fixed(decrease, 1),
        to_fixed(likelihood, 1),
        to_fixed(likelihood - decrease, 1)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use realdiag_core::errors::RealdiagErrorCode;

    fn payload() -> Vec<DiagnosticResult> {
        vec![
            DiagnosticResult::new("Tension Headache", 5.0),
            DiagnosticResult::new("Migraine Headache", 8.5)
                .with_test_characteristics(0.92, 0.88)
                .with_presentations(["headache", "photophobia", "nausea"]),
        ]
    }

    #[test]
    fn test_load_results_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(&path, r#"[{"label": "Gout", "match_score": 6.0}]"#).unwrap();
        let results = load_results(Some(&path)).unwrap();
        assert_eq!(results[0].label, "Gout");
    }

    #[test]
    fn test_load_results_missing_file() {
        let err = load_results(Some(Path::new("/nonexistent/realdiag/results.json"))).unwrap_err();
        assert_eq!(err.error_code(), "PAYLOAD_IO");
    }

    #[test]
    fn test_rank_json_output() {
        let config = RealdiagConfig::from_toml("[output]\nformat = \"json\"\n").unwrap();
        let mut buf = Vec::new();
        rank(&payload(), &config, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["label"], "Migraine Headache");
        assert_eq!(value[1]["confidence_level"], "Unknown");
    }

    #[test]
    fn test_explain_is_case_insensitive_fallback() {
        let mut buf = Vec::new();
        explain(&payload(), "migraine headache", &RealdiagConfig::default(), &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("Migraine Headache"));
    }

    #[test]
    fn test_explain_unknown_label() {
        let mut buf = Vec::new();
        let err = explain(&payload(), "Cluster Headache", &RealdiagConfig::default(), &mut buf)
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_LABEL");
    }

    #[test]
    fn test_what_if_report() {
        let mut buf = Vec::new();
        what_if(80.0, 4, 1, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Removing 1 of 4 finding(s): -20.0 points (80.0% -> 60.0%)\n"
        );
    }
}
