#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;


// Re-exports for public API
pub use config::rules::{load_rules, resolve_rules_path};
pub use config::session::{load_session, resolve_session_path, save_session};
pub use domain::{
    build_settlement, replay, ComputedRound, Ledger, RoundDraft, RoundRecord, RoundStore,
    RulesConfig, SavedGame, SettlementMatrix, WinMethod,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
