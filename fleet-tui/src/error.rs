//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode selection: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}
