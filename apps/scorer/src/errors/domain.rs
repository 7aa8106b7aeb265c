//! Domain-level error type used by the ledger, the round store and the
//! session snapshot layer.
//!
//! This error type is I/O-agnostic. Callers that touch the filesystem
//! return `Result<T, crate::error::AppError>` and convert from
//! `DomainError` using the provided `From<DomainError> for AppError`.

use thiserror::Error;

/// Validation failures detected before any state mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    NoWinner,
    MissingMethod,
    UnknownMethod,
    WinnerOutOfRange,
    SeatCountMismatch,
    IndexOutOfRange,
}

/// Malformed rules configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigKind {
    MissingRules,
    TooFewPlayers,
    BlankPlayerName,
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Round,
    Player,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Round input or store operation rejected
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Rules configuration cannot start a session
    #[error("config error {0:?}: {1}")]
    Config(ConfigKind, String),
    /// Missing entity in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn config(kind: ConfigKind, detail: impl Into<String>) -> Self {
        Self::Config(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(..))
    }

    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }
}
