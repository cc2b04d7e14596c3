//! # Zoo Shell Entry Point
//!
//! Usage:
//!   zoo-shell                          - Start interactive mode
//!   zoo-shell --script day.zoo         - Run commands from a file
//!   zoo-shell pay 20=1                 - Run one command and exit
//!   zoo-shell --config zoo.toml ...    - Use a specific config file
//!
//! The setup lives in the library for testability.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use zoo_shell::config::{OutputFormat, ShellConfig};
use zoo_shell::interactive::{LineOutcome, Shell};
use zoo_shell::state::ZooState;

#[derive(Parser)]
#[command(name = "zoo-shell")]
#[command(about = "Zoo facility shell: areas, residents, visits and the ticket machine")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run commands from a file, one per line
    #[arg(short, long, conflicts_with = "command")]
    script: Option<PathBuf>,

    /// Print responses as JSON
    #[arg(long)]
    json: bool,

    /// A single command to run, e.g. `visit 0 1 2`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ShellConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if cli.json {
        config.output = OutputFormat::Json;
    }

    zoo_shell::init_tracing(&config.log_filter);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting zoo shell");

    let state = ZooState::from_config(&config).context("Failed to build facility")?;
    let shell = Shell::new(state, config.output);

    if !cli.command.is_empty() {
        let line = cli.command.join(" ");
        match shell.handle_line(&line) {
            LineOutcome::Skip => {}
            LineOutcome::Print(text) | LineOutcome::Exit(text) => println!("{}", text),
        }
        return Ok(());
    }

    if let Some(path) = cli.script {
        let file = File::open(&path)
            .with_context(|| format!("Failed to open script {}", path.display()))?;
        info!(script = %path.display(), "Running script");
        shell.run(BufReader::new(file), &mut io::stdout(), false)?;
        return Ok(());
    }

    shell.run_repl()
}
