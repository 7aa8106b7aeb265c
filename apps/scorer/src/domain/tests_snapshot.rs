use crate::domain::draft::RoundDraft;
use crate::domain::fixtures::{full_table_rules, heads_up_rules};
use crate::domain::round::{RoundRecord, WinMethod};
use crate::domain::snapshot::SavedGame;
use crate::domain::store::RoundStore;
use crate::errors::domain::{ConfigKind, DomainError};

#[test]
fn capture_then_restore_rebuilds_same_ledger() {
    let mut store = RoundStore::new(full_table_rules()).unwrap();
    store.append(RoundRecord::new(0, WinMethod::NormalWin, 4)).unwrap();
    store
        .append(RoundRecord::new(0, WinMethod::Fight, 4).with_fighter(2, 5))
        .unwrap();
    store
        .append(RoundRecord::new(3, WinMethod::Tongits, 4).with_no_meld(1))
        .unwrap();

    let json = SavedGame::capture(&store, None).to_json().unwrap();
    let (restored, draft) = SavedGame::from_json(&json).unwrap().into_store().unwrap();

    assert!(draft.is_none());
    assert_eq!(restored.all(), store.all());
    assert_eq!(restored.ledger(), store.ledger());
}

#[test]
fn snapshot_omits_derived_fields() {
    let mut store = RoundStore::new(heads_up_rules()).unwrap();
    store.append(RoundRecord::new(1, WinMethod::NormalWin, 2)).unwrap();

    let json = serde_json::to_value(SavedGame::capture(&store, None)).unwrap();
    let round = &json["rounds"][0];
    assert!(round.get("perPlayerNet").is_none());
    assert!(round.get("streakAfter").is_none());
    assert!(json.get("netTotals").is_none());
    assert!(json.get("currentForm").is_none());
    assert!(json["lastUpdated"].is_string());
}

#[test]
fn draft_survives_the_round_trip() {
    let store = RoundStore::new(heads_up_rules()).unwrap();
    let draft = RoundDraft {
        winner_index: Some(1),
        no_melds: vec![true, false],
        ..RoundDraft::default()
    };

    let json = SavedGame::capture(&store, Some(draft.clone()))
        .to_json()
        .unwrap();
    let (_, restored) = SavedGame::from_json(&json).unwrap().into_store().unwrap();
    assert_eq!(restored, Some(draft));
}

#[test]
fn legacy_blob_is_replayed_not_trusted() {
    let json = r#"{
        "rules": {
            "players": ["Ana", "Ben", "Cai"],
            "cardValues": { "king": { "enabled": true, "value": 5 } },
            "winBonuses": {
                "tongits": { "enabled": true, "value": 40 },
                "normalWin": { "enabled": true, "value": 20 },
                "fight": { "enabled": false, "value": 0 }
            },
            "winStreak": { "stackable": false, "base": 10, "perStack": 0 }
        },
        "rounds": [
            {
                "id": "1718000000000-4821",
                "roundNumber": 4,
                "timestamp": 1718000000000,
                "winnerIndex": 2,
                "winnerName": "Cai",
                "method": "normalWin",
                "specialCounts": { "king": 1 },
                "perPlayerNet": [-999, -999, 1998],
                "streakConsecutiveBefore": 5,
                "streakAfter": 6
            },
            {
                "id": "1718000060000-77",
                "roundNumber": 4,
                "winnerIndex": 2,
                "method": "tongits",
                "noMelds": [false, false, false],
                "perPlayerNet": [0, 0, 0]
            }
        ],
        "lastUpdated": 1718000123456,
        "currentForm": {
            "winnerIndex": null,
            "method": null,
            "specialCounts": { "king": 0, "ace": 0 },
            "noMelds": [false, false, false],
            "fighters": [false, false, false],
            "deadwood": [0, 0, 0],
            "quadraUpgradeOwners": [false, false, false]
        }
    }"#;

    let game = SavedGame::from_json(json).unwrap();
    assert_eq!(
        game.last_updated.map(|t| t.unix_timestamp()),
        Some(1_718_000_123)
    );

    let (store, draft) = game.into_store().unwrap();
    let numbers: Vec<u32> = store.all().iter().map(|r| r.round_number).collect();
    assert_eq!(numbers, vec![1, 2]);

    // Round 1: 20 + 5 per loser. Round 2: 40 + 10 streak per loser.
    let ledger = store.ledger();
    assert_eq!(ledger.computed_rounds[0].per_player_net, vec![-25, -25, 50]);
    assert_eq!(ledger.computed_rounds[1].per_player_net, vec![-50, -50, 100]);
    assert_eq!(ledger.computed_rounds[1].streak_consecutive_before, 1);
    assert_eq!(ledger.net_totals, vec![-75, -75, 150]);

    let draft = draft.unwrap();
    assert!(!draft.is_complete());
    assert_eq!(draft.deadwood, vec![0, 0, 0]);
}

#[test]
fn rfc3339_last_updated_is_accepted() {
    let json = r#"{
        "rules": { "players": ["A", "B"] },
        "rounds": [],
        "lastUpdated": "2024-06-10T06:13:20Z"
    }"#;
    let game = SavedGame::from_json(json).unwrap();
    assert_eq!(
        game.last_updated.map(|t| t.unix_timestamp()),
        Some(1_718_000_000)
    );
}

#[test]
fn snapshot_without_rules_cannot_be_restored() {
    let game = SavedGame::from_json(r#"{"rounds": []}"#).unwrap();
    let err = game.into_store().unwrap_err();
    assert!(matches!(err, DomainError::Config(ConfigKind::MissingRules, _)));
}

#[test]
fn snapshot_with_bad_round_is_rejected() {
    let json = r#"{
        "rules": { "players": ["A", "B"] },
        "rounds": [{ "winnerIndex": 4, "method": "fight" }]
    }"#;
    let err = SavedGame::from_json(json).unwrap().into_store().unwrap_err();
    assert!(err.is_validation());
}
