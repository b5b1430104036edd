use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::config::LaunchConfig;
use crate::error::{AppError, AppResult};

/// A configured path together with its absolute form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub configured: PathBuf,
    pub absolute: PathBuf,
}

impl ResolvedPath {
    pub fn resolve(base_dir: &Path, configured: &Path) -> Self {
        Self {
            configured: configured.to_path_buf(),
            absolute: absolutize(base_dir, configured),
        }
    }

    /// Empty or whitespace-only values never name an artifact.
    pub fn is_blank(&self) -> bool {
        self.configured.to_string_lossy().trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RunPaths {
    pub base_dir: PathBuf,
    pub input_video: ResolvedPath,
    pub input_audio: ResolvedPath,
    pub output_video: ResolvedPath,
    pub tool_dir: ResolvedPath,
    pub checkpoint: ResolvedPath,
    pub detector_weights: ResolvedPath,
    pub entry_point: ResolvedPath,
}

impl RunPaths {
    pub fn resolve(config: &LaunchConfig, base_dir: &Path) -> AppResult<Self> {
        if !base_dir.is_absolute() {
            return Err(AppError::Config(format!(
                "base directory must be absolute: {}",
                base_dir.display()
            )));
        }

        let resolve = |path: &Path| ResolvedPath::resolve(base_dir, path);

        Ok(Self {
            base_dir: base_dir.to_path_buf().clean(),
            input_video: resolve(&config.input_video),
            input_audio: resolve(&config.input_audio),
            output_video: resolve(&config.output_video),
            tool_dir: resolve(&config.tool_dir),
            checkpoint: resolve(&config.checkpoint),
            detector_weights: resolve(&config.detector_weights),
            entry_point: resolve(&config.entry_point),
        })
    }
}

/// Joins relative paths onto `base_dir` and normalises lexically.
pub fn absolutize(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        base_dir.join(path).clean()
    }
}
