use crate::domain::fixtures::{full_table_rules, heads_up_rules};
use crate::domain::round::{RoundRecord, SpecialCounts, WinMethod};
use crate::domain::rules::{RulesConfig, Toggle, WinStreak};
use crate::domain::scoring::{compute_round_deltas, winner_special_total};

#[test]
fn normal_win_without_extras() {
    let rules = heads_up_rules();
    let record = RoundRecord::new(0, WinMethod::NormalWin, 2);
    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![50, -50]);
}

#[test]
fn second_consecutive_win_adds_flat_streak_bonus() {
    let mut rules = heads_up_rules();
    rules.win_streak = WinStreak {
        stackable: false,
        base: 10,
        per_stack: 0,
    };
    let record = RoundRecord::new(0, WinMethod::NormalWin, 2);

    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![50, -50]);
    assert_eq!(compute_round_deltas(&record, &rules, 1), vec![60, -60]);
    assert_eq!(compute_round_deltas(&record, &rules, 3), vec![60, -60]);
}

#[test]
fn tongits_uses_tongits_value() {
    let mut rules = RulesConfig::for_players(["A", "B", "C"]);
    rules.win_bonuses.tongits = Toggle::on(40);
    rules.win_bonuses.normal_win = Toggle::on(20);

    let record = RoundRecord::new(2, WinMethod::Tongits, 3);
    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![-40, -40, 80]);
}

#[test]
fn win_bonus_value_applies_even_when_unticked() {
    let mut rules = RulesConfig::for_players(["A", "B"]);
    rules.win_bonuses.normal_win = Toggle {
        enabled: false,
        value: 15,
    };
    let record = RoundRecord::new(1, WinMethod::NormalWin, 2);
    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![-15, 15]);
}

#[test]
fn fighter_pays_more_than_non_fighter() {
    let mut rules = RulesConfig::for_players(["Win", "Fighter", "Bystander"]);
    rules.fight_rules.fighter_pays_more = true;
    rules.fight_rules.fighter_loss = 30;
    rules.fight_rules.non_fighter_loss = 10;

    let record = RoundRecord::new(0, WinMethod::Fight, 3).with_fighter(1, 0);
    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![40, -30, -10]);
}

#[test]
fn fighter_marks_ignored_for_other_methods() {
    let mut rules = RulesConfig::for_players(["A", "B", "C"]);
    rules.win_bonuses.normal_win = Toggle::on(20);
    rules.fight_rules.fighter_pays_more = true;
    rules.fight_rules.fighter_loss = 99;
    rules.fight_rules.count_deadwood = true;
    rules.fight_rules.deadwood_value = 3;

    let record = RoundRecord::new(0, WinMethod::NormalWin, 3).with_fighter(1, 10);
    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![40, -20, -20]);
}

#[test]
fn special_total_is_charged_to_every_loser() {
    let mut rules = RulesConfig::for_players(["A", "B", "C", "D"]);
    rules.card_values.king = Toggle::on(5);
    rules.melds.quadra = Toggle::on(15);

    let counts = SpecialCounts {
        king: 2,
        quadra: 1,
        ..SpecialCounts::default()
    };
    assert_eq!(winner_special_total(&counts, &rules), 25);

    let record = RoundRecord::new(3, WinMethod::NormalWin, 4).with_specials(counts);
    assert_eq!(
        compute_round_deltas(&record, &rules, 0),
        vec![-25, -25, -25, 75]
    );
}

#[test]
fn no_meld_penalty_only_when_enabled() {
    let mut rules = heads_up_rules();
    let record = RoundRecord::new(0, WinMethod::NormalWin, 2).with_no_meld(1);

    rules.melds.no_meld = Toggle {
        enabled: false,
        value: 20,
    };
    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![50, -50]);

    rules.melds.no_meld = Toggle::on(20);
    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![70, -70]);
}

#[test]
fn winner_no_meld_mark_is_ignored() {
    let mut rules = heads_up_rules();
    rules.melds.no_meld = Toggle::on(20);
    let record = RoundRecord::new(0, WinMethod::NormalWin, 2).with_no_meld(0);
    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![50, -50]);
}

#[test]
fn quadra_upgrade_owner_collects_from_winner() {
    let mut rules = RulesConfig::for_players(["A", "B", "C"]);
    rules.win_bonuses.normal_win = Toggle::on(20);
    rules.melds.quadra_upgrade = Toggle::on(25);

    let record = RoundRecord::new(0, WinMethod::NormalWin, 3).with_quadra_upgrade_owner(2);
    // Winner collects 20 from each loser, then pays 25 to the owner.
    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![15, -20, 5]);
}

#[test]
fn quadra_upgrade_owned_by_winner_is_no_op() {
    let mut rules = heads_up_rules();
    rules.melds.quadra_upgrade = Toggle::on(25);
    let record = RoundRecord::new(0, WinMethod::NormalWin, 2).with_quadra_upgrade_owner(0);
    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![50, -50]);
}

#[test]
fn quadra_upgrade_disabled_transfers_nothing() {
    let mut rules = heads_up_rules();
    rules.melds.quadra_upgrade = Toggle {
        enabled: false,
        value: 25,
    };
    let record = RoundRecord::new(0, WinMethod::NormalWin, 2).with_quadra_upgrade_owner(1);
    assert_eq!(compute_round_deltas(&record, &rules, 0), vec![50, -50]);
}

#[test]
fn full_table_fight_combines_every_component() {
    let rules = full_table_rules();
    let record = RoundRecord::new(1, WinMethod::Fight, 4)
        .with_specials(SpecialCounts {
            ace: 1,
            straight: 2,
            ..SpecialCounts::default()
        })
        .with_fighter(0, 4)
        .with_no_meld(3)
        .with_quadra_upgrade_owner(2);

    // Streak: third straight win, stackable 10 + 5 * (2 - 1) = 15.
    // Specials: 1 * 10 + 2 * 8 = 26.
    // Seat 0 (fighter, deadwood 4): 30 + 4 + 15 + 26 = 75.
    // Seat 2 (non-fighter): 10 + 15 + 26 = 51, then +25 quadra upgrade.
    // Seat 3 (non-fighter, no meld): 10 + 15 + 26 + 6 = 57.
    let net = compute_round_deltas(&record, &rules, 2);
    assert_eq!(net, vec![-75, 75 + 51 + 57 - 25, -51 + 25, -57]);
    assert_eq!(net.iter().sum::<i64>(), 0);
}
