//! Pairwise debt settlement from session net totals.

use serde::Serialize;
use tracing::debug;

use crate::domain::rules::{Amount, Seat};

/// One direct player-to-player payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Payment {
    pub debtor: Seat,
    pub creditor: Seat,
    pub amount: Amount,
}

/// N×N grid where `get(debtor, creditor)` is what the debtor pays.
/// The diagonal is always 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SettlementMatrix {
    cells: Vec<Vec<Amount>>,
}

impl SettlementMatrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            cells: vec![vec![0; n]; n],
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, debtor: Seat, creditor: Seat) -> Amount {
        self.cells
            .get(debtor)
            .and_then(|row| row.get(creditor))
            .copied()
            .unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<Amount>] {
        &self.cells
    }

    /// Total paid out by `debtor` across all creditors.
    pub fn paid_by(&self, debtor: Seat) -> Amount {
        self.cells
            .get(debtor)
            .map(|row| row.iter().copied().fold(0, Amount::saturating_add))
            .unwrap_or(0)
    }

    /// Total received by `creditor` across all debtors.
    pub fn received_by(&self, creditor: Seat) -> Amount {
        self.cells
            .iter()
            .map(|row| row.get(creditor).copied().unwrap_or(0))
            .fold(0, Amount::saturating_add)
    }

    /// Non-zero cells in debtor-major order.
    pub fn payments(&self) -> Vec<Payment> {
        let mut out = Vec::new();
        for (debtor, row) in self.cells.iter().enumerate() {
            for (creditor, &amount) in row.iter().enumerate() {
                if amount != 0 {
                    out.push(Payment {
                        debtor,
                        creditor,
                        amount,
                    });
                }
            }
        }
        out
    }
}

/// Greedy debtor→creditor netting.
///
/// Creditors (net > 0) and debtors (net < 0) keep player order. Each debtor
/// in turn pays the current creditor as much as either side allows, moving
/// to the next creditor once one is fully paid. The result is stable and
/// reproducible but not guaranteed to minimise the number of payments.
pub fn build_settlement(net_totals: &[Amount]) -> SettlementMatrix {
    let mut matrix = SettlementMatrix::zeros(net_totals.len());

    let mut creditors: Vec<(Seat, Amount)> = net_totals
        .iter()
        .enumerate()
        .filter_map(|(i, &v)| (v > 0).then_some((i, v)))
        .collect();
    let debtors: Vec<(Seat, Amount)> = net_totals
        .iter()
        .enumerate()
        .filter_map(|(i, &v)| (v < 0).then_some((i, v.saturating_neg())))
        .collect();

    let mut ci = 0;
    for (debtor, owed) in debtors {
        let mut remaining = owed;
        while remaining > 0 && ci < creditors.len() {
            let (creditor, credit) = &mut creditors[ci];
            let pay = remaining.min(*credit);
            matrix.cells[debtor][*creditor] = matrix.cells[debtor][*creditor].saturating_add(pay);
            debug!(debtor, creditor = *creditor, pay, "Settlement payment");
            remaining -= pay;
            *credit -= pay;
            if *credit == 0 {
                ci += 1;
            }
        }
    }

    matrix
}
