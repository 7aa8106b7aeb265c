#![allow(dead_code)]

// tests/common/mod.rs
use scorer::{RoundDraft, RulesConfig, WinMethod};

// Logging is auto-installed for every integration test binary
#[ctor::ctor]
fn init_logging() {
    scorer_test_support::test_logging::init();
}

/// Rules blob as the setup screen writes it: three players, every family
/// enabled, streak stacking on.
pub const TABLE_RULES_JSON: &str = r#"{
    "players": ["Ana", "Ben", "Cai"],
    "cardValues": {
        "king": { "enabled": true, "value": 5 },
        "queen": { "enabled": false, "value": 3 },
        "jack": { "enabled": false, "value": 2 },
        "ace": { "enabled": true, "value": 10 }
    },
    "winBonuses": {
        "tongits": { "enabled": true, "value": 40 },
        "normalWin": { "enabled": true, "value": 20 },
        "fight": { "enabled": true, "value": 30 }
    },
    "melds": {
        "quadra": { "enabled": true, "value": 15 },
        "quadraUpgrade": { "enabled": true, "value": 15 },
        "straight": { "enabled": false, "value": 0 },
        "multipleMelds": { "enabled": false, "value": 0 },
        "noMeld": { "enabled": true, "value": 6 }
    },
    "winStreak": { "stackable": true, "base": 10, "perStack": 5 },
    "fightRules": {
        "fighterPaysMore": true,
        "fighterLoss": 30,
        "nonFighterLoss": 10,
        "countDeadwood": true,
        "deadwoodValue": 1
    }
}"#;

pub fn table_rules() -> RulesConfig {
    serde_json::from_str(TABLE_RULES_JSON).expect("table rules parse")
}

/// Draft with winner and method filled in, nothing else marked.
pub fn draft(winner: usize, method: WinMethod) -> RoundDraft {
    RoundDraft {
        winner_index: Some(winner),
        method: Some(method),
        ..RoundDraft::default()
    }
}
