use proptest::prelude::*;

use crate::domain::replay::replay;
use crate::domain::round::{RoundRecord, WinMethod};
use crate::domain::store::RoundStore;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn every_round_sums_to_zero((rules, records) in test_gens::session(12)) {
        let ledger = replay(&records, &rules);
        for round in &ledger.computed_rounds {
            prop_assert_eq!(round.per_player_net.len(), rules.player_count());
            prop_assert_eq!(round.per_player_net.iter().sum::<i64>(), 0);
        }
        prop_assert_eq!(ledger.net_totals.iter().sum::<i64>(), 0);
    }

    #[test]
    fn totals_are_column_sums_of_rounds((rules, records) in test_gens::session(12)) {
        let ledger = replay(&records, &rules);
        let mut expected = vec![0i64; rules.player_count()];
        for round in &ledger.computed_rounds {
            for (total, delta) in expected.iter_mut().zip(&round.per_player_net) {
                *total += delta;
            }
        }
        prop_assert_eq!(ledger.net_totals, expected);
    }

    #[test]
    fn replay_is_repeatable((rules, records) in test_gens::session(10)) {
        prop_assert_eq!(replay(&records, &rules), replay(&records, &rules));
    }

    #[test]
    fn streak_counter_grows_only_on_repeat_winner(winners in test_gens::streaky_winners(3, 20)) {
        let rules = crate::domain::fixtures::full_table_rules();
        let records: Vec<RoundRecord> = winners
            .iter()
            .map(|&w| RoundRecord::new(w, WinMethod::NormalWin, 4))
            .collect();
        let ledger = replay(&records, &rules);

        prop_assert_eq!(ledger.computed_rounds[0].streak_consecutive_before, 0);
        for pair in ledger.computed_rounds.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            prop_assert_eq!(cur.streak_after, cur.streak_consecutive_before + 1);
            if cur.winner == prev.winner {
                prop_assert_eq!(cur.streak_consecutive_before, prev.streak_after);
            } else {
                prop_assert_eq!(cur.streak_consecutive_before, 0);
            }
        }
    }

    #[test]
    fn settlement_conserves_net_totals((rules, records) in test_gens::session(12)) {
        let ledger = replay(&records, &rules);
        let matrix = ledger.settlement();

        for (seat, &net) in ledger.net_totals.iter().enumerate() {
            prop_assert_eq!(matrix.get(seat, seat), 0);
            prop_assert_eq!(matrix.received_by(seat) - matrix.paid_by(seat), net);
        }
        for payment in matrix.payments() {
            prop_assert!(payment.amount > 0);
            prop_assert!(ledger.net_totals[payment.debtor] < 0);
            prop_assert!(ledger.net_totals[payment.creditor] > 0);
        }
    }

    #[test]
    fn overwrite_matches_fresh_replay(
        (rules, records) in test_gens::session(8),
        pick in any::<prop::sample::Index>(),
        winner in any::<prop::sample::Index>(),
        method in test_gens::win_method(),
    ) {
        prop_assume!(!records.is_empty());
        let n = rules.player_count();
        let mut store = RoundStore::with_records(rules.clone(), records).unwrap();

        let index = pick.index(store.len());
        let earlier = store.ledger().computed_rounds[..index].to_vec();
        let replacement = RoundRecord::new(winner.index(n), method, n);
        store.overwrite(index, replacement).unwrap();

        let fresh = replay(store.all(), &rules);
        prop_assert_eq!(store.ledger(), &fresh);
        prop_assert_eq!(&store.ledger().computed_rounds[..index], earlier.as_slice());
        prop_assert_eq!(store.get(index).map(|r| r.method), Some(method));
    }

    #[test]
    fn delete_matches_fresh_replay(
        (rules, records) in test_gens::session(8),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!records.is_empty());
        let mut store = RoundStore::with_records(rules.clone(), records.clone()).unwrap();

        let index = pick.index(store.len());
        store.delete(index).unwrap();

        let mut expected = records;
        expected.remove(index);
        let fresh = replay(&expected, &rules);
        prop_assert_eq!(store.ledger(), &fresh);
        let numbers: Vec<u32> = store.all().iter().map(|r| r.round_number).collect();
        let positions: Vec<u32> = (1..=store.len() as u32).collect();
        prop_assert_eq!(numbers, positions);
    }
}
