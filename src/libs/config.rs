//! Configuration management for the todolist application.
//!
//! Settings are kept as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). A missing file is not an error: the defaults
//! point at `todo_list.db` next to the configuration.
//!
//! The database location is resolved in this order:
//! 1. `TODOLIST_DATABASE_PATH` from the environment (or a `.env` file)
//! 2. `database.path` from `config.json`
//! 3. `<data dir>/<database.name>.db`
//!
//! ```rust,no_run
//! use todolist::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.database_config().resolve_path()?;
//! println!("{}", db_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the database file location.
pub const DATABASE_PATH_ENV: &str = "TODOLIST_DATABASE_PATH";

pub const DEFAULT_DATABASE_NAME: &str = "todo_list";

/// Where the tasks table lives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Database name; the file is `<name>.db` inside the data directory.
    pub name: String,

    /// Explicit database file, takes precedence over `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(skip)]
    storage: Option<DataStorage>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            name: DEFAULT_DATABASE_NAME.to_string(),
            path: None,
            storage: None,
        }
    }
}

impl DatabaseConfig {
    /// Config for `<name>.db` in the data directory.
    pub fn named(name: &str) -> Self {
        DatabaseConfig {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Config pointing straight at a database file.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        DatabaseConfig {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Uses `storage` instead of the platform data directory for the
    /// name-based location.
    pub fn with_storage(mut self, storage: DataStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Resolves the database file, honoring `TODOLIST_DATABASE_PATH`.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        self.resolve_path_with(env::var(DATABASE_PATH_ENV).ok())
    }

    pub fn resolve_path_with(&self, env_override: Option<String>) -> Result<PathBuf> {
        if let Some(path) = env_override.filter(|p| !p.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        let storage = self.storage.clone().unwrap_or_default();
        Ok(storage.get_path(&format!("{}.db", self.name))?)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Reads `config.json` from the platform data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let mut config: Config = serde_json::from_str(&config_str)?;
        if let Some(database) = config.database.as_mut() {
            database.storage = Some(storage.clone());
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete_from(storage: &DataStorage) -> Result<bool> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// The configured database, or the default one.
    pub fn database_config(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }

    /// Interactive setup wizard, prefilled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.database_config();

        msg_print!(Message::ConfigModuleDatabase);
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabaseName.to_string())
            .default(default.name.clone())
            .interact_text()?;

        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(default.path.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        config.database = Some(DatabaseConfig {
            name: name.trim().to_string(),
            path: Some(path.trim()).filter(|p| !p.is_empty()).map(PathBuf::from),
            storage: None,
        });

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let config = DatabaseConfig::at_path("/tmp/from-config.db");
        let path = config.resolve_path_with(Some("/tmp/from-env.db".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/from-env.db"));
    }

    #[test]
    fn test_blank_env_override_is_ignored() {
        let config = DatabaseConfig::at_path("/tmp/from-config.db");
        let path = config.resolve_path_with(Some("  ".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/from-config.db"));
    }

    #[test]
    fn test_name_based_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::named("groceries").with_storage(DataStorage::with_base(dir.path()));
        let path = config.resolve_path_with(None).unwrap();
        assert_eq!(path, dir.path().join("groceries.db"));
    }
}
