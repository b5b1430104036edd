use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CliOverrides;

#[derive(Debug, Parser)]
#[command(name = "wav2lip-launcher")]
#[command(about = "Preflight checks and launcher for Wav2Lip inference")]
pub struct Cli {
    #[arg(long = "video")]
    pub input_video: Option<PathBuf>,

    #[arg(long = "audio")]
    pub input_audio: Option<PathBuf>,

    #[arg(long = "output")]
    pub output_video: Option<PathBuf>,

    #[arg(long)]
    pub tool_dir: Option<PathBuf>,

    #[arg(long)]
    pub checkpoint: Option<PathBuf>,

    #[arg(long)]
    pub detector_weights: Option<PathBuf>,

    #[arg(long)]
    pub entry_point: Option<PathBuf>,

    #[arg(long)]
    pub resize_factor: Option<u32>,

    /// Interpreter for the entry-point; defaults to the active virtualenv's python.
    #[arg(long = "python")]
    pub interpreter: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Check the layout, then run inference.
    Run,
    /// Check the layout without launching anything.
    Check {
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Run)
    }

    pub fn to_overrides(&self) -> CliOverrides {
        CliOverrides {
            input_video: self.input_video.clone(),
            input_audio: self.input_audio.clone(),
            output_video: self.output_video.clone(),
            tool_dir: self.tool_dir.clone(),
            checkpoint: self.checkpoint.clone(),
            detector_weights: self.detector_weights.clone(),
            entry_point: self.entry_point.clone(),
            resize_factor: self.resize_factor,
            interpreter: self.interpreter.clone(),
        }
    }
}
