use std::path::PathBuf;

use thiserror::Error;

use crate::errors::domain::{ConfigKind, DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Rules error: {detail}")]
    Rules { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl AppError {
    /// Stable error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Rules { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Io { .. } => ErrorCode::IoError,
            AppError::Json { .. } => ErrorCode::JsonError,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::NoWinner => ErrorCode::NoWinner,
                    ValidationKind::MissingMethod => ErrorCode::MissingMethod,
                    ValidationKind::UnknownMethod => ErrorCode::UnknownMethod,
                    ValidationKind::WinnerOutOfRange => ErrorCode::InvalidWinner,
                    ValidationKind::SeatCountMismatch => ErrorCode::SeatCountMismatch,
                    ValidationKind::IndexOutOfRange => ErrorCode::InvalidRoundIndex,
                };
                AppError::Validation { code, detail }
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Round => ErrorCode::RoundNotFound,
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                };
                AppError::NotFound { code, detail }
            }
            DomainError::Config(kind, detail) => {
                let code = match kind {
                    ConfigKind::MissingRules => ErrorCode::MissingRules,
                    ConfigKind::TooFewPlayers => ErrorCode::TooFewPlayers,
                    ConfigKind::BlankPlayerName => ErrorCode::BlankPlayerName,
                };
                AppError::Rules { code, detail }
            }
        }
    }
}
