use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod error;
mod report;

use error::CliError;
use realdiag_core::config::{CliOverrides, OutputFormat, RealdiagConfig};

#[derive(Parser, Debug)]
#[command(name = "realdiag", version = realdiag_core::constants::VERSION)]
#[command(about = "RealDiag - Bayesian likelihood scoring for diagnostic results")]
struct Cli {
    /// Directory holding realdiag.toml (default: current directory)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score and rank every result in a payload
    Rank {
        /// Payload file (`-` or omitted reads stdin)
        file: Option<PathBuf>,
        /// Output format (table, json)
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Omit decision traces
        #[arg(long)]
        no_trace: bool,
        /// Override the prior probability
        #[arg(long)]
        prior: Option<f64>,
    },
    /// Show the likelihood and decision trace of one result
    Explain {
        /// Payload file (`-` or omitted reads stdin)
        file: Option<PathBuf>,
        /// Label of the result to explain
        #[arg(long)]
        label: String,
        /// Output format (table, json)
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Estimate the likelihood decrease from removing findings
    WhatIf {
        /// Current likelihood percentage
        #[arg(long)]
        likelihood: f64,
        /// Total matched findings
        #[arg(long)]
        findings: usize,
        /// Findings to remove
        #[arg(long)]
        remove: usize,
    },
}

fn main() -> ExitCode {
    realdiag_core::tracing::init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = report::write_error(&mut std::io::stderr().lock(), &e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let root = cli.config_dir.unwrap_or_else(|| PathBuf::from("."));
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Rank {
            file,
            format,
            no_trace,
            prior,
        } => {
            let overrides = CliOverrides {
                base_probability: prior,
                output_format: format,
                include_trace: no_trace.then_some(false),
            };
            let config = RealdiagConfig::load(&root, Some(&overrides))?;
            let results = commands::load_results(file.as_deref())?;
            tracing::info!(count = results.len(), "ranking diagnostic results");
            commands::rank(&results, &config, &mut stdout)
        }
        Commands::Explain {
            file,
            label,
            format,
        } => {
            let overrides = CliOverrides {
                output_format: format,
                ..Default::default()
            };
            let config = RealdiagConfig::load(&root, Some(&overrides))?;
            let results = commands::load_results(file.as_deref())?;
            commands::explain(&results, &label, &config, &mut stdout)
        }
        Commands::WhatIf {
            likelihood,
            findings,
            remove,
        } => commands::what_if(likelihood, findings, remove, &mut stdout),
    }
}
