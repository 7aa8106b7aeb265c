use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{flag_or_var, RULES_ENV};
use crate::domain::rules::RulesConfig;
use crate::error::AppError;

/// Rules file path from `--rules` or `TONGITS_RULES`.
pub fn resolve_rules_path(flag: Option<PathBuf>) -> Result<PathBuf, AppError> {
    flag_or_var(flag, RULES_ENV)
}

/// Read and validate a rules JSON file.
pub fn load_rules(path: &Path) -> Result<RulesConfig, AppError> {
    let text = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let rules: RulesConfig = serde_json::from_str(&text)?;
    rules.validate()?;
    info!(path = %path.display(), players = rules.player_count(), "Rules loaded");
    Ok(rules)
}
