use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Directory the launcher was started from. Captured once so later working
/// directory changes cannot move the resolved paths.
pub fn invocation_dir() -> AppResult<PathBuf> {
    let dir = std::env::current_dir().map_err(|error| {
        AppError::Config(format!("unable to resolve current directory: {error}"))
    })?;
    tracing::debug!(base_dir = %dir.display(), "captured invocation directory");
    Ok(dir)
}
