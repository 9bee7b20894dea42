//! Error types shared across Subline crates.

use std::path::PathBuf;

/// Top-level error type for Subline operations.
#[derive(Debug, thiserror::Error)]
pub enum SublineError {
    #[error("Timecode error: {message}")]
    Timecode { message: String },

    #[error("Transcript error: {message}")]
    Transcript { message: String },

    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using SublineError.
pub type SublineResult<T> = Result<T, SublineError>;

impl SublineError {
    pub fn timecode(msg: impl Into<String>) -> Self {
        Self::Timecode {
            message: msg.into(),
        }
    }

    pub fn transcript(msg: impl Into<String>) -> Self {
        Self::Transcript {
            message: msg.into(),
        }
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
