pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod preflight;
pub mod runtime;
#[cfg(test)]
mod test_support;

use std::path::Path;

use clap::Parser;

use crate::bootstrap::invocation_dir;
use crate::cli::{Cli, Command};
use crate::config::{load_config, LaunchConfig};
use crate::error::AppResult;
use crate::launcher::ProcessRunner;
use crate::runtime::{run_check, run_pipeline};

trait CommandExecutor {
    fn run(&self, config: &LaunchConfig, base_dir: &Path) -> AppResult<()>;
    fn check(&self, config: &LaunchConfig, base_dir: &Path, json: bool) -> AppResult<()>;
}

struct DefaultCommandExecutor;

impl CommandExecutor for DefaultCommandExecutor {
    fn run(&self, config: &LaunchConfig, base_dir: &Path) -> AppResult<()> {
        let stdout = std::io::stdout();
        let mut console = stdout.lock();
        run_pipeline(config, base_dir, &ProcessRunner, &mut console)
    }

    fn check(&self, config: &LaunchConfig, base_dir: &Path, json: bool) -> AppResult<()> {
        let stdout = std::io::stdout();
        let mut console = stdout.lock();
        run_check(config, base_dir, json, &mut console)
    }
}

fn execute_command<E: CommandExecutor>(
    command: Command,
    config: &LaunchConfig,
    base_dir: &Path,
    executor: &E,
) -> AppResult<()> {
    match command {
        Command::Run => executor.run(config, base_dir),
        Command::Check { json } => executor.check(config, base_dir, json),
    }
}

/// Process exit status for a finished run.
pub fn exit_code(result: &AppResult<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

pub fn run() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.to_overrides())?;
    let base_dir = invocation_dir()?;

    execute_command(cli.command(), &config, &base_dir, &DefaultCommandExecutor)
}
