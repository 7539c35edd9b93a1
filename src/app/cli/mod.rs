//! CLI Adapter.

mod logging;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::adapters::FileChainSource;
use crate::app::commands::{check, resolve};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "chainorder")]
#[command(version)]
#[command(
    about = "Resolve the execution order of constrained processing stages",
    long_about = None
)]
struct Cli {
    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved stage order of a chain file
    #[clap(visible_alias = "r")]
    Resolve {
        /// Chain declaration file (.yml, .yaml, or .toml)
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Validate that a chain file's order constraints are satisfiable
    #[clap(visible_alias = "c")]
    Check {
        /// Chain declaration file (.yml, .yaml, or .toml)
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Resolve { file, format } => run_resolve(file, format),
        Commands::Check { file } => run_check(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_resolve(file: PathBuf, format: OutputFormat) -> Result<(), AppError> {
    let outcome = resolve::execute(&FileChainSource::new(file))?;

    match format {
        OutputFormat::Text => {
            println!("Resolved order of {} stage(s):", outcome.order.len());
            for ranked in &outcome.order {
                println!("  {}. {}", ranked.rank, ranked.stage);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome).map_err(io::Error::from)?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_check(file: PathBuf) -> Result<(), AppError> {
    let outcome = check::execute(&FileChainSource::new(file))?;
    println!(
        "✅ {}: {} stage(s), {} constraint(s), order is satisfiable",
        outcome.source, outcome.stages, outcome.constraints
    );
    Ok(())
}
