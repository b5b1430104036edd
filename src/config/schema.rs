use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_VIDEO: &str = "input_video.mp4";
pub const DEFAULT_INPUT_AUDIO: &str = "new_audio.wav";
pub const DEFAULT_OUTPUT_VIDEO: &str = "output_video.mp4";
pub const DEFAULT_TOOL_DIR: &str = "Wav2Lip";
pub const DEFAULT_RESIZE_FACTOR: u32 = 2;

/// Every path the preflight and the launcher look at, as configured.
///
/// Values may be relative; they are resolved once against the base directory
/// by [`crate::bootstrap::RunPaths::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub input_video: PathBuf,
    pub input_audio: PathBuf,
    pub output_video: PathBuf,
    pub tool_dir: PathBuf,
    pub checkpoint: PathBuf,
    pub detector_weights: PathBuf,
    pub entry_point: PathBuf,
    pub resize_factor: u32,
    pub interpreter: Option<PathBuf>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self::with_tool_dir(DEFAULT_TOOL_DIR)
    }
}

impl LaunchConfig {
    /// Default configuration with the model files and entry-point placed
    /// under `tool_dir`.
    pub fn with_tool_dir(tool_dir: impl AsRef<Path>) -> Self {
        let tool_dir = tool_dir.as_ref();
        Self {
            input_video: PathBuf::from(DEFAULT_INPUT_VIDEO),
            input_audio: PathBuf::from(DEFAULT_INPUT_AUDIO),
            output_video: PathBuf::from(DEFAULT_OUTPUT_VIDEO),
            tool_dir: tool_dir.to_path_buf(),
            checkpoint: checkpoint_under(tool_dir),
            detector_weights: detector_weights_under(tool_dir),
            entry_point: entry_point_under(tool_dir),
            resize_factor: DEFAULT_RESIZE_FACTOR,
            interpreter: None,
        }
    }
}

pub fn checkpoint_under(tool_dir: &Path) -> PathBuf {
    tool_dir.join("checkpoints").join("wav2lip_gan.pth")
}

pub fn detector_weights_under(tool_dir: &Path) -> PathBuf {
    tool_dir
        .join("face_detection")
        .join("detection")
        .join("sfd")
        .join("s3fd.pth")
}

pub fn entry_point_under(tool_dir: &Path) -> PathBuf {
    tool_dir.join("inference.py")
}
