//! Environment-driven CLI configuration.
//!
//! # Responsibility
//! - Resolve the database path and logging settings once at startup.

use quailbook_core::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "QUAILBOOK_DB";
pub const LOG_DIR_ENV: &str = "QUAILBOOK_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "QUAILBOOK_LOG_LEVEL";
const DEFAULT_DB_FILE_NAME: &str = "quailbook.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub db_path: PathBuf,
    /// File logging is disabled when `None`.
    pub log_dir: Option<String>,
    pub log_level: String,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            db_path: read(DB_PATH_ENV)
                .map_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME), PathBuf::from),
            log_dir: read(LOG_DIR_ENV),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, DB_PATH_ENV, LOG_DIR_ENV};
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_when_variables_are_unset_or_blank() {
        let config = CliConfig::from_lookup(|key| (key == LOG_DIR_ENV).then(|| "  ".to_string()));
        assert_eq!(config.db_path, PathBuf::from("quailbook.sqlite3"));
        assert_eq!(config.log_dir, None);
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn explicit_db_path_wins() {
        let config =
            CliConfig::from_lookup(|key| (key == DB_PATH_ENV).then(|| "/tmp/flock.db".to_string()));
        assert_eq!(config.db_path, PathBuf::from("/tmp/flock.db"));
    }
}
