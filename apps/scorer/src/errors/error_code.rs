//! Error codes for the Tongits scorer.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and are what the CLI prints
//! alongside an error message.

use core::fmt;

/// Centralized error codes for the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round validation
    /// No winner selected for the round
    NoWinner,
    /// No win method chosen for the round
    MissingMethod,
    /// Win method name not recognised
    UnknownMethod,
    /// Winner index outside the player range
    InvalidWinner,
    /// Per-player data longer than the player list
    SeatCountMismatch,
    /// Round index outside the stored history
    InvalidRoundIndex,

    // Resource Not Found
    /// Round not found
    RoundNotFound,
    /// Player not found
    PlayerNotFound,

    // Configuration
    /// Rules configuration missing
    MissingRules,
    /// Fewer than two players configured
    TooFewPlayers,
    /// A player name is blank
    BlankPlayerName,
    /// Configuration error (environment / flags)
    ConfigError,

    // System Errors
    /// Session file could not be read or written
    IoError,
    /// Session or rules JSON could not be parsed or produced
    JsonError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoWinner => "NO_WINNER",
            Self::MissingMethod => "MISSING_METHOD",
            Self::UnknownMethod => "UNKNOWN_METHOD",
            Self::InvalidWinner => "INVALID_WINNER",
            Self::SeatCountMismatch => "SEAT_COUNT_MISMATCH",
            Self::InvalidRoundIndex => "INVALID_ROUND_INDEX",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::MissingRules => "MISSING_RULES",
            Self::TooFewPlayers => "TOO_FEW_PLAYERS",
            Self::BlankPlayerName => "BLANK_PLAYER_NAME",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
