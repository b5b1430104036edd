use std::path::PathBuf;

use crate::config::schema::{
    checkpoint_under, detector_weights_under, entry_point_under, LaunchConfig,
};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input_video: Option<PathBuf>,
    pub input_audio: Option<PathBuf>,
    pub output_video: Option<PathBuf>,
    pub tool_dir: Option<PathBuf>,
    pub checkpoint: Option<PathBuf>,
    pub detector_weights: Option<PathBuf>,
    pub entry_point: Option<PathBuf>,
    pub resize_factor: Option<u32>,
    pub interpreter: Option<PathBuf>,
}

pub fn load_config(overrides: &CliOverrides) -> AppResult<LaunchConfig> {
    let mut config = LaunchConfig::default();
    apply_cli_overrides(&mut config, overrides);

    validate(&config)?;
    Ok(config)
}

fn apply_cli_overrides(config: &mut LaunchConfig, overrides: &CliOverrides) {
    // Tool-relative files move with the tool dir unless pinned explicitly below.
    if let Some(tool_dir) = &overrides.tool_dir {
        config.tool_dir = tool_dir.clone();
        config.checkpoint = checkpoint_under(tool_dir);
        config.detector_weights = detector_weights_under(tool_dir);
        config.entry_point = entry_point_under(tool_dir);
    }

    if let Some(value) = &overrides.input_video {
        config.input_video = value.clone();
    }
    if let Some(value) = &overrides.input_audio {
        config.input_audio = value.clone();
    }
    if let Some(value) = &overrides.output_video {
        config.output_video = value.clone();
    }
    if let Some(value) = &overrides.checkpoint {
        config.checkpoint = value.clone();
    }
    if let Some(value) = &overrides.detector_weights {
        config.detector_weights = value.clone();
    }
    if let Some(value) = &overrides.entry_point {
        config.entry_point = value.clone();
    }
    if let Some(value) = overrides.resize_factor {
        config.resize_factor = value;
    }
    if let Some(value) = &overrides.interpreter {
        config.interpreter = Some(value.clone());
    }
}

fn validate(config: &LaunchConfig) -> AppResult<()> {
    if config.resize_factor == 0 {
        return Err(AppError::Config("resize_factor must be > 0".to_owned()));
    }

    if config.output_video.as_os_str().is_empty() {
        return Err(AppError::Config("output_video must not be empty".to_owned()));
    }

    if let Some(interpreter) = &config.interpreter {
        if interpreter.as_os_str().is_empty() {
            return Err(AppError::Config("interpreter must not be empty".to_owned()));
        }
    }

    Ok(())
}
