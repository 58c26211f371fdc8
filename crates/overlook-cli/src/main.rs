//! Overlook CLI - override auditor for JavaScript package manifests.

mod formatters;

use anyhow::Result;
use clap::Parser;
use overlook_core::audit;
use overlook_npm::{read_overrides, ExplainInvoker, PackageManager};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "overlook")]
#[command(about = "Audit package.json overrides against the resolved dependency graph", long_about = None)]
struct Cli {
    /// Project directory containing package.json
    #[arg(value_name = "PATH", default_value = ".")]
    path: PathBuf,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value = "human")]
    format: OutputFormat,

    /// Verbose output
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let manager = PackageManager::detect(&cli.path);
    if cli.verbose > 0 {
        eprintln!("Detected package manager: {}", manager.name());
    }

    // Manifest problems degrade to an empty audit; the non-zero exit stays
    // reserved for unused overrides.
    let declarations = match read_overrides(&cli.path) {
        Ok(declarations) => declarations,
        Err(err) => {
            eprintln!("Warning: {err}");
            Vec::new()
        }
    };
    if cli.verbose > 0 {
        eprintln!("Declared overrides: {}", declarations.len());
    }

    let invoker = ExplainInvoker::new(&cli.path);
    let report = audit(&declarations, &invoker);

    for diagnostic in &report.diagnostics {
        eprintln!("Warning: {diagnostic}");
    }

    let formatter: Box<dyn formatters::Formatter> = match cli.format {
        OutputFormat::Human => Box::new(formatters::HumanFormatter),
        OutputFormat::Json => Box::new(formatters::JsonFormatter),
    };
    formatter.format(&report);

    if !report.unused.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
