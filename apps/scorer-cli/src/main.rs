//! Tongits scorer CLI - keeps a session file of recorded rounds and
//! replays it into scores, streaks and a settlement grid.

mod commands;
mod output;
mod report;
mod types;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{DeleteArgs, ExportArgs, InitArgs, RecordArgs, ShowArgs};
use scorer::{resolve_session_path, AppError};
use tracing::debug;

#[derive(Parser)]
#[command(name = "tongits-scorer")]
#[command(about = "Round ledger and settlement for Tongits sessions")]
struct Cli {
    /// Session file (defaults to $TONGITS_SESSION)
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Show progress and output file paths
    #[arg(long, global = true)]
    show_output: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new session from a rules file
    Init(InitArgs),
    /// Record a round, or edit one with --edit
    Record(RecordArgs),
    /// Delete a round and replay the rest
    Delete(DeleteArgs),
    /// Print the scoreboard
    Show(ShowArgs),
    /// Export computed rounds
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Silent by default, only warnings and errors
    let filter = if cli.verbose {
        "debug"
    } else if cli.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<AppError>() {
                Some(app) => eprintln!("error [{}]: {}", app.code(), app),
                None => eprintln!("error: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let session = resolve_session_path(cli.session)?;
    debug!(session = %session.display(), "Using session file");

    match cli.command {
        Command::Init(args) => commands::init(&session, args)?,
        Command::Record(args) => commands::record(&session, args)?,
        Command::Delete(args) => commands::delete(&session, args)?,
        Command::Show(args) => commands::show(&session, args)?,
        Command::Export(args) => commands::export(&session, args)?,
    }
    Ok(())
}
