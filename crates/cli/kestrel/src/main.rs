//! Kestrel command line front-end
//!
//! Loads syntax trees exported by a parser front-end and runs the lint
//! rules or prints the resolved reference map of every declaration.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod input;
mod lint;
mod logging;
mod refs;

#[derive(Parser)]
#[command(name = "kestrel")]
#[command(about = "Variable resolution and lints over exported syntax trees", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Coloured, human readable
    Text,
    /// Machine readable
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks on tree files
    Lint {
        /// A tree file or a directory searched for `*.json` trees
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Configuration file (defaults to `kestrel.toml` next to the input)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Attach fixes to diagnostics that support them
        #[arg(long)]
        fix: bool,
    },

    /// Print every declaration with its resolved references
    Refs {
        /// A tree file or a directory searched for `*.json` trees
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Only report references that are written to
        #[arg(long)]
        assignments: bool,
    },
}

fn main() -> Result<ExitCode> {
    logging::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Lint {
            path,
            format,
            config,
            fix,
        } => {
            let failed = lint::run_lint(&path, format, config.as_deref(), fix)?;
            Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Refs {
            path,
            format,
            assignments,
        } => {
            refs::print_references(&path, format, assignments)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
