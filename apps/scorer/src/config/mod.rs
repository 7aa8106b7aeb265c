//! Configuration: where rules and sessions live, and how they are read.

pub mod rules;
pub mod session;

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Environment variable naming the default session file.
pub const SESSION_ENV: &str = "TONGITS_SESSION";
/// Environment variable naming the default rules file.
pub const RULES_ENV: &str = "TONGITS_RULES";

/// Prefer an explicit path; otherwise fall back to the environment.
fn flag_or_var(flag: Option<PathBuf>, name: &str) -> Result<PathBuf, AppError> {
    if let Some(path) = flag {
        return Ok(path);
    }
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            AppError::config(format!(
                "No path given and environment variable '{name}' is not set"
            ))
        })
}
