//! # autojson CLI entry point
//!
//! Parses command-line arguments, loads configuration, builds the engine
//! facades, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use autojson_cli::config::load_config;
use autojson_cli::policy::{run_policy, PolicyArgs};
use autojson_cli::validate::{run_validate, ValidateArgs};
use autojson_cli::BANNER;
use autojson_engine::ObjectFactory;

/// Auto JSON serializer: policy input and results output over fixed models.
#[derive(Parser, Debug)]
#[command(name = "autojson", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that a file is well-formed JSON.
    Validate(ValidateArgs),

    /// Deserialize a policy file and list its entries.
    Policy(PolicyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("{BANNER}\n");
        return ExitCode::SUCCESS;
    };

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    let factory = ObjectFactory::new(config.engine);

    let mut stdout = std::io::stdout().lock();
    let result = match command {
        Commands::Validate(args) => run_validate(&args, &factory, &mut stdout),
        Commands::Policy(args) => run_policy(&args, &factory, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
