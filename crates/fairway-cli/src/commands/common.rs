use std::env;
use std::path::{Path, PathBuf};

use fairway_core::db::Database;
use fairway_core::util::normalize_text_option;

use crate::error::CliError;

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> PathBuf {
    cli_db_path
        .or_else(|| env::var_os("FAIRWAY_DB_PATH").map(PathBuf::from))
        .unwrap_or_else(default_db_path)
}

pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| panic!("Failed to resolve CLI data directory"))
        .join("fairway")
        .join("fairway.db")
}

pub fn open_database(path: &Path) -> Result<Database, CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    Ok(Database::open(path)?)
}

/// Resolve the tournament server base URL from the flag or environment
pub fn resolve_api_base_url(cli_api_url: Option<String>) -> Result<String, CliError> {
    normalize_text_option(cli_api_url.or_else(|| env::var("FAIRWAY_API_URL").ok()))
        .ok_or(CliError::ApiNotConfigured)
}
