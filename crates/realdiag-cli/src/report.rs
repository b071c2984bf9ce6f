//! Rendering outcomes for the terminal.

use std::io::{self, Write};

use realdiag_analysis::likelihood::{to_fixed, LikelihoodOutcome};
use realdiag_core::errors::RealdiagErrorCode;

use crate::error::CliError;

/// Ranked table, optionally with each outcome's trace indented below it.
pub fn write_table<W: Write>(
    out: &mut W,
    outcomes: &[LikelihoodOutcome],
    include_trace: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "{:>3}  {:<32} {:>10}  {:<10}  Color",
        "#", "Diagnosis", "Likelihood", "Confidence"
    )?;
    for (rank, outcome) in outcomes.iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:<32} {:>10}  {:<10}  {}",
            rank + 1,
            outcome.label,
            format_posterior(outcome.posterior),
            outcome.confidence_level,
            outcome.confidence_color
        )?;
        if include_trace {
            for line in &outcome.trace {
                writeln!(out, "       {line}")?;
            }
        }
    }
    Ok(())
}

/// Pretty JSON array of outcomes.
pub fn write_json<W: Write>(
    out: &mut W,
    outcomes: &[LikelihoodOutcome],
    include_trace: bool,
) -> io::Result<()> {
    if include_trace {
        serde_json::to_writer_pretty(&mut *out, outcomes)?;
    } else {
        let stripped: Vec<LikelihoodOutcome> = outcomes
            .iter()
            .cloned()
            .map(|mut o| {
                o.trace.clear();
                o
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &stripped)?;
    }
    writeln!(out)
}

/// Detailed view of a single outcome.
pub fn write_explanation<W: Write>(out: &mut W, outcome: &LikelihoodOutcome) -> io::Result<()> {
    writeln!(out, "{}", outcome.label)?;
    writeln!(
        out,
        "Likelihood: {} ({} confidence, {})",
        format_posterior(outcome.posterior),
        outcome.confidence_level,
        outcome.confidence_color
    )?;
    writeln!(out, "Decision trace:")?;
    for line in &outcome.trace {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

/// A failed command as a single `[CODE] message` line.
pub fn write_error<W: Write>(out: &mut W, error: &CliError) -> io::Result<()> {
    writeln!(out, "{}", error.coded_string())
}

fn format_posterior(posterior: Option<f64>) -> String {
    posterior
        .map(|p| format!("{}%", to_fixed(p, 1)))
        .unwrap_or_else(|| "n/a".to_string())
}
