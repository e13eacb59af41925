use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dragsort_list::ListConfig;

use crate::error::Result;
use crate::replay::{ReplayArgs, run_replay};
use crate::scenario::Scenario;

#[derive(Debug, Parser)]
#[command(
    name = "dragsort-harness",
    about = "Replay scripted drag sessions against the dragsort list engine",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a scenario and print a JSONL trace.
    Replay(ReplayArgs),

    /// Print the effective list configuration.
    Check(CheckArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Scenario whose configuration should be shown instead of the defaults.
    #[arg(long)]
    pub scenario: Option<PathBuf>,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Replay(args) => run_replay(args),
        Commands::Check(args) => {
            println!("{}", check(&args)?);
            Ok(())
        }
    }
}

/// Effective configuration as pretty JSON.
pub fn check(args: &CheckArgs) -> Result<String> {
    let config = match &args.scenario {
        Some(path) => Scenario::from_path(path)?.config,
        None => ListConfig::default(),
    };
    Ok(serde_json::to_string_pretty(&config)?)
}
