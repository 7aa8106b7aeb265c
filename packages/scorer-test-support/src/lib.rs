//! Test support utilities for the scorer crates
//!
//! Shared logging initialization plus helpers for isolated session files,
//! so integration tests never touch a real saved game.

pub mod session_files;
pub mod test_logging;

pub use session_files::{unique_str, SessionDir};
