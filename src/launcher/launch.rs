use std::io::Write;

use crate::bootstrap::RunPaths;
use crate::config::LaunchConfig;
use crate::error::{AppError, AppResult};
use crate::launcher::interpreter::resolve_interpreter;
use crate::launcher::invocation::build_invocation;
use crate::launcher::runner::ExternalRunner;

const RULE: &str = "----------------------------------------------------";

/// Runs inference once the preflight has passed.
///
/// Success is decided by the child's exit status alone. A missing output
/// file after a zero exit is only logged.
pub fn launch_inference(
    paths: &RunPaths,
    config: &LaunchConfig,
    runner: &impl ExternalRunner,
    console: &mut dyn Write,
) -> AppResult<()> {
    writeln!(
        console,
        "Step 3: All checks passed. Starting Wav2Lip inference process..."
    )?;
    writeln!(
        console,
        "This may take some time depending on your video length and hardware."
    )?;

    let interpreter = resolve_interpreter(config.interpreter.as_deref(), &paths.base_dir)?;
    let invocation = build_invocation(paths, interpreter, config.resize_factor);
    tracing::info!(
        program = %invocation.program.display(),
        working_dir = %invocation.working_dir.display(),
        "launching inference"
    );
    tracing::debug!(argv = ?invocation.argv(), "inference arguments");

    // The child writes to the same terminal.
    console.flush()?;
    let exit = runner.run(&invocation)?;

    if !exit.success() {
        tracing::error!(detail = %exit.detail, "inference exited unsuccessfully");
        writeln!(console, "\n{RULE}")?;
        writeln!(
            console,
            "An error occurred while running the Wav2Lip inference script: {}",
            exit.detail
        )?;
        writeln!(
            console,
            "--> Please check the output above for specific error messages from the script."
        )?;
        return Err(AppError::InferenceFailed {
            detail: exit.detail,
        });
    }

    if !paths.output_video.absolute.is_file() {
        tracing::warn!(
            output = %paths.output_video.absolute.display(),
            "inference exited successfully but the output file is missing"
        );
    }

    writeln!(console, "\n{RULE}")?;
    writeln!(
        console,
        "Success! Your lip-synced video has been saved as: {}",
        paths.output_video.configured.display()
    )?;
    Ok(())
}
