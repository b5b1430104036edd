use std::path::{Path, PathBuf};

use crate::bootstrap::absolutize;
use crate::error::{AppError, AppResult};

const FALLBACK_BINARIES: [&str; 2] = ["python3", "python"];

/// Picks the Python interpreter that will run the entry-point.
///
/// Order: explicit override, the active virtual environment, then `python3`
/// or `python` on `PATH`. Relative paths are taken from `base_dir`, never
/// from the child's working directory.
pub fn resolve_interpreter(override_path: Option<&Path>, base_dir: &Path) -> AppResult<PathBuf> {
    let virtual_env = match override_path {
        Some(_) => None,
        None => std::env::var_os("VIRTUAL_ENV").map(PathBuf::from),
    };
    resolve_with(override_path, virtual_env.as_deref(), base_dir, |binary| {
        which::which(binary).ok()
    })
}

fn resolve_with(
    override_path: Option<&Path>,
    virtual_env: Option<&Path>,
    base_dir: &Path,
    lookup: impl Fn(&str) -> Option<PathBuf>,
) -> AppResult<PathBuf> {
    if let Some(path) = override_path {
        if is_bare_name(path) {
            let name = path.to_string_lossy();
            return lookup(&name).ok_or_else(|| AppError::InterpreterMissing {
                binary: name.into_owned(),
            });
        }
        return Ok(absolutize(base_dir, path));
    }

    if let Some(venv) = virtual_env {
        let candidate = absolutize(base_dir, &venv_interpreter(venv));
        if candidate.is_file() {
            tracing::debug!(interpreter = %candidate.display(), "using virtual environment interpreter");
            return Ok(candidate);
        }
        tracing::warn!(venv = %venv.display(), "VIRTUAL_ENV set but has no interpreter; falling back to PATH");
    }

    FALLBACK_BINARIES
        .iter()
        .find_map(|binary| lookup(binary))
        .ok_or_else(|| AppError::InterpreterMissing {
            binary: FALLBACK_BINARIES[0].to_owned(),
        })
}

fn is_bare_name(path: &Path) -> bool {
    !path.is_absolute() && path.components().count() == 1
}

fn venv_interpreter(venv: &Path) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts").join("python.exe")
    } else {
        venv.join("bin").join("python")
    }
}
