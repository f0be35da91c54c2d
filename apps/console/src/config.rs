//! # Console Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKSTORE_*`)
//! 2. Config file (`bookstore.toml`, or the file named by `BOOKSTORE_CONFIG`)
//! 3. Defaults (this file)
//!
//! ## Example `bookstore.toml`
//! ```toml
//! database_path = "/var/lib/bookstore/bookstore.db"
//! log_filter = "info,bookstore=debug,sqlx=warn"
//! max_connections = 2
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use bookstore_db::DbConfig;

use crate::error::{AppError, AppResult};

/// Overrides the database file.
pub const ENV_DB_PATH: &str = "BOOKSTORE_DB_PATH";

/// Overrides the log filter (`RUST_LOG` syntax).
pub const ENV_LOG: &str = "BOOKSTORE_LOG";

/// Path of the config file to read.
pub const ENV_CONFIG: &str = "BOOKSTORE_CONFIG";

const CONFIG_FILE_NAME: &str = "bookstore.toml";
const DATABASE_FILE_NAME: &str = "bookstore.db";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info,bookstore=debug,sqlx=warn";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// SQLite file, or `:memory:` for a throwaway database.
    pub database_path: PathBuf,

    /// tracing-subscriber filter directives
    pub log_filter: String,

    /// Pool size. The console runs one command at a time, so small is fine.
    pub max_connections: u32,
}

impl Default for ConsoleConfig {
    /// ## Default Values
    /// - Database: `bookstore.db` in the platform data directory
    /// - Log filter: `info,bookstore=debug,sqlx=warn`
    /// - Pool: 2 connections
    fn default() -> Self {
        ConsoleConfig {
            database_path: default_database_path(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            max_connections: 2,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from the process environment and config file.
    pub fn load() -> AppResult<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `env` to look up variables.
    ///
    /// A missing default config file is fine; a missing file named by
    /// `BOOKSTORE_CONFIG` is an error.
    pub fn load_with<F>(env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = env(ENV_CONFIG).map(PathBuf::from);

        let mut config = match (&explicit, default_config_path()) {
            (Some(path), _) => Self::from_file(path)?,
            (None, Some(path)) if path.exists() => Self::from_file(&path)?,
            _ => ConsoleConfig::default(),
        };

        config.apply_env(env);
        Ok(config)
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> AppResult<Self> {
        let config: ConsoleConfig = toml::from_str(text)?;
        if config.max_connections == 0 {
            return Err(AppError::config("max_connections must be at least 1"));
        }
        Ok(config)
    }

    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = env(ENV_DB_PATH) {
            self.database_path = PathBuf::from(path);
        }

        if let Some(filter) = env(ENV_LOG) {
            self.log_filter = filter;
        }
    }

    /// Database settings for this configuration.
    pub fn db_config(&self) -> DbConfig {
        let config = DbConfig::new(&self.database_path);
        if config.is_in_memory() {
            return DbConfig::in_memory();
        }
        config.max_connections(self.max_connections)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "bookstore", "tracker")
}

/// `bookstore.toml` in the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// `bookstore.db` in the platform data directory, or the working directory
/// when no home directory is known.
///
/// - **macOS**: `~/Library/Application Support/com.bookstore.tracker/bookstore.db`
/// - **Windows**: `%APPDATA%\bookstore\tracker\data\bookstore.db`
/// - **Linux**: `~/.local/share/tracker/bookstore.db`
pub fn default_database_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().join(DATABASE_FILE_NAME),
        None => PathBuf::from(DATABASE_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ConsoleConfig::from_toml_str("database_path = \"/tmp/shop.db\"").unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let err = ConsoleConfig::from_toml_str("max_connections = \"many\"").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigError);

        let err = ConsoleConfig::from_toml_str("max_connections = 0").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigError);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = ConsoleConfig::from_toml_str(
            "database_path = \"/tmp/file.db\"\nlog_filter = \"warn\"",
        )
        .unwrap();

        config.apply_env(env_from(&[(ENV_DB_PATH, "/tmp/env.db")]));

        assert_eq!(config.database_path, PathBuf::from("/tmp/env.db"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_missing_explicit_config_file_fails() {
        let env = env_from(&[(ENV_CONFIG, "/nonexistent/dir/bookstore.toml")]);
        let err = ConsoleConfig::load_with(env).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigError);
    }

    #[test]
    fn test_in_memory_path_gives_in_memory_db() {
        let config = ConsoleConfig {
            database_path: PathBuf::from(":memory:"),
            ..ConsoleConfig::default()
        };
        assert!(config.db_config().is_in_memory());

        let config = ConsoleConfig {
            database_path: PathBuf::from("/tmp/x.db"),
            max_connections: 4,
            ..ConsoleConfig::default()
        };
        let db = config.db_config();
        assert!(!db.is_in_memory());
        assert_eq!(db.max_connections, 4);
    }
}
