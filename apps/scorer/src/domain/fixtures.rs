//! Shared rule fixtures for domain unit tests.

use crate::domain::rules::{RulesConfig, Toggle, WinStreak};

/// Two players, normal win worth 50, nothing else enabled.
pub fn heads_up_rules() -> RulesConfig {
    let mut rules = RulesConfig::for_players(["Ana", "Ben"]);
    rules.win_bonuses.normal_win = Toggle::on(50);
    rules
}

/// Four players with every rule family switched on.
pub fn full_table_rules() -> RulesConfig {
    let mut rules = RulesConfig::for_players(["Ana", "Ben", "Cai", "Dee"]);
    rules.card_values.king = Toggle::on(5);
    rules.card_values.queen = Toggle::on(3);
    rules.card_values.jack = Toggle::on(2);
    rules.card_values.ace = Toggle::on(10);
    rules.win_bonuses.normal_win = Toggle::on(20);
    rules.win_bonuses.tongits = Toggle::on(40);
    rules.win_bonuses.fight = Toggle::on(30);
    rules.melds.quadra = Toggle::on(15);
    rules.melds.quadra_upgrade = Toggle::on(25);
    rules.melds.straight = Toggle::on(8);
    rules.melds.multiple_melds = Toggle::on(12);
    rules.melds.no_meld = Toggle::on(6);
    rules.win_streak = WinStreak {
        stackable: true,
        base: 10,
        per_stack: 5,
    };
    rules.fight_rules.fighter_pays_more = true;
    rules.fight_rules.fighter_loss = 30;
    rules.fight_rules.non_fighter_loss = 10;
    rules.fight_rules.count_deadwood = true;
    rules.fight_rules.deadwood_value = 1;
    rules
}
