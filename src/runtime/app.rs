use std::io::Write;
use std::path::Path;

use crate::bootstrap::RunPaths;
use crate::config::LaunchConfig;
use crate::error::{AppError, AppResult};
use crate::launcher::{launch_inference, ExternalRunner};
use crate::preflight::run_preflight;

/// Validates the layout and, only if every check passes, launches inference.
pub fn run_pipeline(
    config: &LaunchConfig,
    base_dir: &Path,
    runner: &impl ExternalRunner,
    console: &mut dyn Write,
) -> AppResult<()> {
    let paths = RunPaths::resolve(config, base_dir)?;

    let report = run_preflight(&paths, console)?;
    report.outcome().map_err(AppError::Preflight)?;
    tracing::info!("preflight passed");

    launch_inference(&paths, config, runner, console)
}

/// Preflight only. Prints the report as a table or as JSON.
pub fn run_check(
    config: &LaunchConfig,
    base_dir: &Path,
    json: bool,
    console: &mut dyn Write,
) -> AppResult<()> {
    let paths = RunPaths::resolve(config, base_dir)?;

    let report = if json {
        let report = run_preflight(&paths, &mut std::io::sink())?;
        writeln!(console, "{}", serde_json::to_string_pretty(&report)?)?;
        report
    } else {
        let report = run_preflight(&paths, console)?;
        writeln!(console, "{}", report.render_text())?;
        report
    };

    report.outcome().map_err(AppError::Preflight)
}
