//! Plain-text scoreboard rendering.

use std::fmt::Write;

use scorer::domain::Amount;
use scorer::{Ledger, RulesConfig};

const CORNER: &str = "Pays \\ Receives";

/// `0` stays unsigned; everything else carries its sign.
pub fn format_number(n: Amount) -> String {
    match n {
        0 => "0".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}

/// Settlement grid with a net column, net totals, and optionally one block
/// per round.
pub fn scoreboard(rules: &RulesConfig, ledger: &Ledger, with_rounds: bool) -> String {
    let players = &rules.players;
    let matrix = ledger.settlement();

    let name_width = players
        .iter()
        .map(|p| p.chars().count())
        .chain([CORNER.len()])
        .max()
        .unwrap_or(0);
    let cell_width = players
        .iter()
        .map(|p| p.chars().count())
        .chain(matrix.rows().iter().flatten().map(|v| v.to_string().len()))
        .chain(ledger.net_totals.iter().map(|v| format_number(*v).len()))
        .chain(["Net".len()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = write!(out, "{CORNER:<name_width$}");
    for name in players {
        let _ = write!(out, "  {name:>cell_width$}");
    }
    let _ = writeln!(out, "  {:>cell_width$}", "Net");

    for (debtor, name) in players.iter().enumerate() {
        let _ = write!(out, "{name:<name_width$}");
        for creditor in 0..players.len() {
            let cell = if debtor == creditor {
                "-".to_string()
            } else {
                matrix.get(debtor, creditor).to_string()
            };
            let _ = write!(out, "  {cell:>cell_width$}");
        }
        let net = ledger.net_totals.get(debtor).copied().unwrap_or(0);
        let _ = writeln!(out, "  {:>cell_width$}", format_number(net));
    }

    let _ = writeln!(out, "\nNet totals:");
    for (name, net) in players.iter().zip(&ledger.net_totals) {
        let _ = writeln!(out, "  {name}: {}", format_number(*net));
    }

    if with_rounds {
        if ledger.computed_rounds.is_empty() {
            let _ = writeln!(out, "\nNo rounds recorded yet.");
        }
        for round in &ledger.computed_rounds {
            let _ = writeln!(
                out,
                "\nRound {} — Winner: {} ({})",
                round.round_number, round.winner_name, round.method
            );
            let cells: Vec<String> = players
                .iter()
                .zip(&round.per_player_net)
                .map(|(name, delta)| format!("{name}: {}", format_number(*delta)))
                .collect();
            let _ = writeln!(out, "  {}", cells.join("  "));
        }
    }

    out
}
