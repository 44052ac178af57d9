mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use contracts_core::DEFAULT_TOP_K;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dcg")]
#[command(version, about = "Data contract guard: infer, validate and compare tabular data contracts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer a contract from a CSV sample of good data
    Infer {
        /// Path to the CSV file
        data: String,

        /// Contract name (defaults to "contract")
        #[arg(short, long)]
        name: Option<String>,

        /// Output file path; format follows the extension (defaults to YAML on stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a CSV file against a contract
    Validate {
        /// Path to the CSV file
        data: String,

        /// Path to the contract file (YAML, TOML or JSON)
        contract: String,

        /// Report columns not declared in the contract (default)
        #[arg(long, overrides_with = "lenient")]
        strict: bool,

        /// Ignore columns not declared in the contract
        #[arg(long, overrides_with = "strict")]
        lenient: bool,

        /// Number of ranked issues to show
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Severity weight table (YAML, TOML or JSON map of issue kind to weight)
        #[arg(short, long)]
        weights: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Compare a baseline contract with an observed one and report drift
    Compare {
        /// Path to the baseline contract
        baseline: String,

        /// Path to the observed contract
        observed: String,

        /// Exit with status 1 when drift is detected
        #[arg(long)]
        fail_on_drift: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check that a contract file is well formed
    Check {
        /// Path to the contract file (YAML, TOML or JSON)
        contract: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Infer { data, name, output } => {
            commands::infer::execute(&data, name.as_deref(), output.as_deref())
        }

        Commands::Validate {
            data,
            contract,
            strict: _,
            lenient,
            top_k,
            weights,
            format,
        } => commands::validate::execute(
            &data,
            &contract,
            !lenient,
            top_k,
            weights.as_deref(),
            &format,
        ),

        Commands::Compare {
            baseline,
            observed,
            fail_on_drift,
            format,
        } => commands::compare::execute(&baseline, &observed, fail_on_drift, &format),

        Commands::Check { contract, format } => commands::check::execute(&contract, &format),
    }
}
