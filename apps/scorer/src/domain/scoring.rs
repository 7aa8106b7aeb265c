use crate::domain::round::{RoundRecord, SpecialCounts, WinMethod};
use crate::domain::rules::{Amount, RulesConfig, Seat};
use crate::domain::streak::streak_bonus;

/// Flat surcharge every loser pays the winner for special cards and melds.
///
/// Only enabled card and meld values contribute. The same total is charged
/// to each losing player; it is not split between them. Amounts saturate at
/// the `i64` bounds instead of overflowing.
pub fn winner_special_total(counts: &SpecialCounts, rules: &RulesConfig) -> Amount {
    let cards = &rules.card_values;
    let melds = &rules.melds;
    [
        (counts.king, cards.king),
        (counts.ace, cards.ace),
        (counts.queen, cards.queen),
        (counts.jack, cards.jack),
        (counts.quadra, melds.quadra),
        (counts.straight, melds.straight),
        (counts.multiple_melds, melds.multiple_melds),
    ]
    .iter()
    .map(|(count, toggle)| Amount::from(*count).saturating_mul(toggle.active_value()))
    .fold(0, Amount::saturating_add)
}

/// Base loss for one losing seat, before streak, specials and penalties.
///
/// Win-bonus values apply whether or not their checkbox is ticked; only the
/// value is read.
pub fn base_loss(record: &RoundRecord, rules: &RulesConfig, seat: Seat) -> Amount {
    match record.method {
        WinMethod::Fight => {
            let fight = &rules.fight_rules;
            let marks = record.seat(seat);
            let mut amount = if fight.fighter_pays_more {
                if marks.fighter {
                    fight.fighter_loss
                } else {
                    fight.non_fighter_loss
                }
            } else {
                rules.win_bonuses.fight.value
            };
            if fight.count_deadwood && marks.fighter {
                amount = amount
                    .saturating_add(Amount::from(marks.deadwood).saturating_mul(fight.deadwood_value));
            }
            amount
        }
        WinMethod::Tongits => rules.win_bonuses.tongits.value,
        WinMethod::NormalWin => rules.win_bonuses.normal_win.value,
    }
}

/// Per-player monetary deltas for one round.
///
/// `consecutive_before` is the winner's streak entering this round. The
/// result has one entry per configured player and always sums to zero.
/// A winner outside the player range yields all zeros.
pub fn compute_round_deltas(
    record: &RoundRecord,
    rules: &RulesConfig,
    consecutive_before: u32,
) -> Vec<Amount> {
    let n = rules.player_count();
    let mut net = vec![0; n];
    let winner = record.winner;
    if winner >= n {
        return net;
    }

    let streak = streak_bonus(&rules.win_streak, consecutive_before);
    let specials = winner_special_total(&record.special_counts, rules);
    let no_meld_penalty = rules.melds.no_meld.active_value();

    for seat in (0..n).filter(|&p| p != winner) {
        let mut amount = base_loss(record, rules, seat)
            .saturating_add(streak)
            .saturating_add(specials);
        if record.seat(seat).no_meld {
            amount = amount.saturating_add(no_meld_penalty);
        }
        // All inputs are whole units, so the nearest-integer rounding step
        // is the identity here.
        net[winner] = net[winner].saturating_add(amount);
        net[seat] = net[seat].saturating_sub(amount);
    }

    let upgrade = rules.melds.quadra_upgrade.active_value();
    if upgrade != 0 {
        for seat in (0..n).filter(|&p| p != winner && record.seat(p).quadra_upgrade_owner) {
            net[seat] = net[seat].saturating_add(upgrade);
            net[winner] = net[winner].saturating_sub(upgrade);
        }
    }

    net
}
