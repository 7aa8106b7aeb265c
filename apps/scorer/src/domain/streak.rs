//! Win-streak derivation.
//!
//! Streaks are never stored: the ordered record list is the only source of
//! truth for who is on a run, so editing an earlier round corrects every
//! later streak on the next replay.

use crate::domain::round::RoundRecord;
use crate::domain::rules::{Amount, WinStreak};

/// Number of rounds immediately before `index` won by the same player as
/// `records[index]`. Returns 0 for an out-of-range index.
pub fn consecutive_before(records: &[RoundRecord], index: usize) -> u32 {
    let Some(current) = records.get(index) else {
        return 0;
    };
    records[..index]
        .iter()
        .rev()
        .take_while(|r| r.winner == current.winner)
        .count() as u32
}

/// Per-loser streak bonus for a winner with `consecutive_before` prior wins.
///
/// Triggers on the second consecutive win. Flat `base` unless stackable, in
/// which case each further win adds `per_stack`.
pub fn streak_bonus(streak: &WinStreak, consecutive_before: u32) -> Amount {
    if consecutive_before == 0 {
        return 0;
    }
    if streak.stackable {
        streak
            .base
            .saturating_add(streak.per_stack.saturating_mul(Amount::from(consecutive_before - 1)))
    } else {
        streak.base
    }
}
