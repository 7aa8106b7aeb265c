//! Domain layer: pure scoring ledger types and helpers.

pub mod draft;
pub mod replay;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod settlement;
pub mod snapshot;
pub mod store;
pub mod streak;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_ledger;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use draft::RoundDraft;
pub use replay::{replay, ComputedRound, Ledger};
pub use round::{RoundId, RoundRecord, SeatMarks, SpecialCounts, WinMethod};
pub use rules::{Amount, RulesConfig, Seat, Toggle};
pub use scoring::compute_round_deltas;
pub use settlement::{build_settlement, Payment, SettlementMatrix};
pub use snapshot::SavedGame;
pub use store::RoundStore;
pub use streak::{consecutive_before, streak_bonus};
