use thiserror::Error;

use crate::preflight::PreflightFailure;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("preflight failed: {0}")]
    Preflight(PreflightFailure),

    #[error("interpreter `{binary}` missing from PATH")]
    InterpreterMissing { binary: String },

    #[error("failed to launch inference: {0}")]
    Launch(String),

    #[error("inference failed: {detail}")]
    InferenceFailed { detail: String },
}

pub type AppResult<T> = Result<T, AppError>;
