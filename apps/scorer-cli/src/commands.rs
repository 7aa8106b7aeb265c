//! Subcommand handlers. Each one loads the session file, applies a single
//! change through the round store and writes the snapshot back.

use std::path::{Path, PathBuf};

use clap::Args;
use scorer::domain::{RoundId, Seat};
use scorer::errors::domain::{DomainError, ValidationKind};
use scorer::{
    load_rules, load_session, resolve_rules_path, save_session, AppError, RoundDraft, RoundStore,
    RulesConfig, SavedGame, WinMethod,
};
use tracing::info;

use crate::output::ExportWriter;
use crate::report::scoreboard;
use crate::types::OutputFormat;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Rules file (defaults to $TONGITS_RULES)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Replace an existing session file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Default, Args)]
pub struct RecordArgs {
    /// Winner, by name or 0-based seat
    #[arg(short, long, value_name = "PLAYER")]
    pub winner: Option<String>,

    /// How the round was won: normalWin, tongits or fight
    #[arg(short, long)]
    pub method: Option<String>,

    /// Kings held by the winner
    #[arg(long)]
    pub king: Option<u32>,

    /// Aces held by the winner
    #[arg(long)]
    pub ace: Option<u32>,

    /// Queens held by the winner
    #[arg(long)]
    pub queen: Option<u32>,

    /// Jacks held by the winner
    #[arg(long)]
    pub jack: Option<u32>,

    /// Quadra melds laid by the winner
    #[arg(long)]
    pub quadra: Option<u32>,

    /// Straight melds laid by the winner
    #[arg(long)]
    pub straight: Option<u32>,

    /// Multiple-meld bonuses for the winner
    #[arg(long)]
    pub multiple_melds: Option<u32>,

    /// Loser who laid no meld (repeatable)
    #[arg(long = "no-meld", value_name = "PLAYER")]
    pub no_meld: Vec<String>,

    /// Loser who contested a fight (repeatable)
    #[arg(long, value_name = "PLAYER")]
    pub fighter: Vec<String>,

    /// Deadwood points of a fighter, implies --fighter (repeatable)
    #[arg(long, value_name = "PLAYER=POINTS", value_parser = parse_deadwood)]
    pub deadwood: Vec<(String, u32)>,

    /// Player owed the quadra-upgrade bonus by the winner (repeatable)
    #[arg(long = "quadra-upgrade", value_name = "PLAYER")]
    pub quadra_upgrade: Vec<String>,

    /// Drop the per-player marks carried over from the edited round or held draft
    #[arg(long)]
    pub clear_marks: bool,

    /// Replace round N (1-based) instead of appending
    #[arg(long, value_name = "ROUND", value_parser = clap::value_parser!(u32).range(1..))]
    pub edit: Option<u32>,

    /// Keep the round as an unsaved draft instead of recording it
    #[arg(long, conflicts_with = "edit")]
    pub hold: bool,
}

#[derive(Debug, Args)]
#[command(group(clap::ArgGroup::new("target").required(true).args(["round", "id"])))]
pub struct DeleteArgs {
    /// Round number (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub round: Option<u32>,

    /// Round id
    #[arg(long, value_parser = parse_round_id)]
    pub id: Option<RoundId>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Include the per-round breakdown
    #[arg(long)]
    pub rounds: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output directory for exported files
    #[arg(long, default_value = "./tongits-export")]
    pub output_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    pub output_format: OutputFormat,

    /// Compress the rounds file
    #[arg(long)]
    pub compress: bool,
}

fn parse_deadwood(raw: &str) -> Result<(String, u32), String> {
    let (who, points) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected PLAYER=POINTS, got '{raw}'"))?;
    let points = points
        .trim()
        .parse()
        .map_err(|e| format!("bad deadwood points '{points}': {e}"))?;
    Ok((who.trim().to_string(), points))
}

fn parse_round_id(raw: &str) -> Result<RoundId, String> {
    raw.parse().map_err(|e| format!("bad round id '{raw}': {e}"))
}

fn open(session: &Path) -> Result<(RoundStore, Option<RoundDraft>), AppError> {
    Ok(load_session(session)?.into_store()?)
}

fn save(session: &Path, store: &RoundStore, draft: Option<RoundDraft>) -> Result<(), AppError> {
    save_session(session, &SavedGame::capture(store, draft))
}

pub fn init(session: &Path, args: InitArgs) -> Result<(), AppError> {
    if session.exists() && !args.force {
        return Err(AppError::config(format!(
            "session file {} already exists; pass --force to replace it",
            session.display()
        )));
    }
    let rules = load_rules(&resolve_rules_path(args.rules)?)?;
    let store = RoundStore::new(rules)?;
    save(session, &store, None)?;
    println!(
        "New session for {}",
        store.rules().players.join(", ")
    );
    Ok(())
}

pub fn record(session: &Path, args: RecordArgs) -> Result<(), AppError> {
    let (mut store, pending) = open(session)?;
    let n = store.rules().player_count();
    let edit_index = args.edit.map(|round| round as usize - 1);

    let base = match edit_index {
        Some(index) => store.get(index).map(RoundDraft::from).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::IndexOutOfRange,
                format!("cannot edit round {}: {} rounds stored", index + 1, store.len()),
            )
        })?,
        None => pending.clone().unwrap_or_default(),
    };
    let draft = args.apply(base, store.rules())?;

    if args.hold {
        save(session, &store, Some(draft))?;
        println!("Draft held; run `record` again to finish it");
        return Ok(());
    }

    let record = draft.into_record(n)?;
    let (index, pending) = match edit_index {
        Some(index) => {
            store.overwrite(index, record)?;
            (index, pending)
        }
        None => (store.append(record)?, None),
    };
    save(session, &store, pending)?;

    if let Some(summary) = store.ledger().round_summary(index, store.rules()) {
        print!("{summary}");
    }
    Ok(())
}

pub fn delete(session: &Path, args: DeleteArgs) -> Result<(), AppError> {
    let (mut store, pending) = open(session)?;
    let index = match (args.round, args.id) {
        (_, Some(id)) => store.index_of(id)?,
        (Some(round), None) => round as usize - 1,
        (None, None) => return Err(AppError::config("no round given")),
    };
    let removed = store.delete(index)?;
    save(session, &store, pending)?;
    println!(
        "Deleted round {} ({} rounds left)",
        index + 1,
        store.len()
    );
    info!(id = %removed.id, "Deleted round id");
    Ok(())
}

pub fn show(session: &Path, args: ShowArgs) -> Result<(), AppError> {
    let (store, _) = open(session)?;
    print!("{}", scoreboard(store.rules(), store.ledger(), args.rounds));
    Ok(())
}

pub fn export(session: &Path, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (store, _) = open(session)?;
    let ledger = store.ledger();

    let mut writer = ExportWriter::new(
        &args.output_dir,
        args.output_format,
        args.compress,
        &store.rules().players,
    )?;
    for round in &ledger.computed_rounds {
        writer.write_round(round)?;
    }
    let (rounds_path, csv_path) = writer.output_paths();
    let (rounds_path, csv_path) = (rounds_path.to_path_buf(), csv_path.to_path_buf());
    writer.finish(&ledger.net_totals)?;

    info!("Rounds written to: {}", rounds_path.display());
    info!("Summary CSV written to: {}", csv_path.display());
    Ok(())
}

impl RecordArgs {
    /// Overlay the command-line choices on `draft`.
    fn apply(&self, mut draft: RoundDraft, rules: &RulesConfig) -> Result<RoundDraft, AppError> {
        let n = rules.player_count();

        if let Some(who) = &self.winner {
            draft.winner_index = Some(rules.seat_of(who)?);
        }
        if let Some(method) = &self.method {
            draft.method = Some(method.parse::<WinMethod>()?);
        }

        let counts = &mut draft.special_counts;
        for (slot, value) in [
            (&mut counts.king, self.king),
            (&mut counts.ace, self.ace),
            (&mut counts.queen, self.queen),
            (&mut counts.jack, self.jack),
            (&mut counts.quadra, self.quadra),
            (&mut counts.straight, self.straight),
            (&mut counts.multiple_melds, self.multiple_melds),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }

        // A mark list given on the command line replaces the carried-over one.
        if self.clear_marks || !self.no_meld.is_empty() {
            draft.no_melds.clear();
        }
        if self.clear_marks || !self.fighter.is_empty() || !self.deadwood.is_empty() {
            draft.fighters.clear();
        }
        if self.clear_marks || !self.deadwood.is_empty() {
            draft.deadwood.clear();
        }
        if self.clear_marks || !self.quadra_upgrade.is_empty() {
            draft.quadra_upgrade_owners.clear();
        }

        for who in &self.no_meld {
            mark(&mut draft.no_melds, n, rules.seat_of(who)?);
        }
        for who in &self.fighter {
            mark(&mut draft.fighters, n, rules.seat_of(who)?);
        }
        for (who, points) in &self.deadwood {
            let seat = rules.seat_of(who)?;
            mark(&mut draft.fighters, n, seat);
            if draft.deadwood.len() < n {
                draft.deadwood.resize(n, 0);
            }
            draft.deadwood[seat] = *points;
        }
        for who in &self.quadra_upgrade {
            mark(&mut draft.quadra_upgrade_owners, n, rules.seat_of(who)?);
        }

        Ok(draft)
    }
}

fn mark(flags: &mut Vec<bool>, n: usize, seat: Seat) {
    if flags.len() < n {
        flags.resize(n, false);
    }
    flags[seat] = true;
}
