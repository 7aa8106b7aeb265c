//! Deterministic replay of the round history.
//!
//! `replay` is a total function of the record list and the rules: it keeps
//! no memory between runs, so rebuilding after every edit can never leave
//! derived state out of step with the source records.

use serde::Serialize;
use tracing::debug;

use crate::domain::round::{RoundId, RoundRecord, WinMethod};
use crate::domain::rules::{Amount, RulesConfig, Seat};
use crate::domain::scoring::compute_round_deltas;
use crate::domain::settlement::{build_settlement, SettlementMatrix};
use crate::domain::streak::consecutive_before;

/// Display view of one replayed round. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedRound {
    pub id: RoundId,
    pub round_number: u32,
    pub winner: Seat,
    pub winner_name: String,
    pub method: WinMethod,
    /// One entry per player, summing to zero.
    pub per_player_net: Vec<Amount>,
    pub streak_consecutive_before: u32,
    pub streak_after: u32,
}

/// Replay output: every computed round plus session net totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub computed_rounds: Vec<ComputedRound>,
    pub net_totals: Vec<Amount>,
}

impl Ledger {
    /// Ledger for a session with no rounds yet.
    pub fn empty(player_count: usize) -> Self {
        Self {
            computed_rounds: Vec::new(),
            net_totals: vec![0; player_count],
        }
    }

    pub fn settlement(&self) -> SettlementMatrix {
        build_settlement(&self.net_totals)
    }

    /// Feedback text for a saved round: header line then one signed delta
    /// per player.
    pub fn round_summary(&self, index: usize, rules: &RulesConfig) -> Option<String> {
        let round = self.computed_rounds.get(index)?;
        let mut summary = format!(
            "Round saved — Winner: {} ({})\n",
            round.winner_name, round.method
        );
        for (seat, delta) in round.per_player_net.iter().enumerate() {
            let name = rules.player_name(seat).unwrap_or("?");
            summary.push_str(&format!("{name}: {}\n", signed(*delta)));
        }
        Some(summary)
    }
}

/// `+n` for non-negative amounts, `-n` otherwise.
pub fn signed(amount: Amount) -> String {
    if amount >= 0 {
        format!("+{amount}")
    } else {
        amount.to_string()
    }
}

/// Re-derive every round's deltas and streak counters in array order.
pub fn replay(records: &[RoundRecord], rules: &RulesConfig) -> Ledger {
    let mut ledger = Ledger::empty(rules.player_count());

    for (index, record) in records.iter().enumerate() {
        // Only records[..index] feed the streak count.
        let before = consecutive_before(&records[..=index], index);
        let per_player_net = compute_round_deltas(record, rules, before);

        for (total, delta) in ledger.net_totals.iter_mut().zip(&per_player_net) {
            *total = total.saturating_add(*delta);
        }

        debug!(
            round = index + 1,
            winner = record.winner,
            method = %record.method,
            streak_before = before,
            deltas = ?per_player_net,
            "Replayed round"
        );

        ledger.computed_rounds.push(ComputedRound {
            id: record.id,
            round_number: index as u32 + 1,
            winner: record.winner,
            winner_name: rules.player_name(record.winner).unwrap_or_default().to_string(),
            method: record.method,
            per_player_net,
            streak_consecutive_before: before,
            streak_after: before + 1,
        });
    }

    ledger
}
