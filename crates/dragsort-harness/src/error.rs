use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("required path does not exist: {path}")]
    MissingPath { path: PathBuf },

    #[error("invalid scenario: {message}")]
    InvalidScenario { message: String },

    #[error("invalid task: {message}")]
    InvalidTask { message: String },

    #[error("unknown task id: {id}")]
    UnknownTask { id: u64 },

    #[error("{message}")]
    Exit { code: i32, message: String },
}

impl HarnessError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exit { code, .. } => *code,
            Self::InvalidScenario { .. } | Self::MissingPath { .. } => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn exit(code: i32, message: impl Into<String>) -> Self {
        Self::Exit {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_scenario(message: impl Into<String>) -> Self {
        Self::InvalidScenario {
            message: message.into(),
        }
    }
}
