use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{flag_or_var, SESSION_ENV};
use crate::domain::snapshot::SavedGame;
use crate::error::AppError;

/// Session file path from `--session` or `TONGITS_SESSION`.
pub fn resolve_session_path(flag: Option<PathBuf>) -> Result<PathBuf, AppError> {
    flag_or_var(flag, SESSION_ENV)
}

/// Read a saved game from disk.
pub fn load_session(path: &Path) -> Result<SavedGame, AppError> {
    let text = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let saved = SavedGame::from_json(&text)?;
    debug!(path = %path.display(), rounds = saved.rounds.len(), "Session file read");
    Ok(saved)
}

/// Write a saved game, replacing the file only once the new contents are
/// fully on disk.
pub fn save_session(path: &Path, saved: &SavedGame) -> Result<(), AppError> {
    let json = saved.to_json()?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| AppError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| AppError::io(path, e))?;
    info!(path = %path.display(), rounds = saved.rounds.len(), "Session saved");
    Ok(())
}
