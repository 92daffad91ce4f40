//! Optional settings file kept in the application root.
//!
//! The file is plain JSON. A missing file is not an error: [`Config::read`]
//! hands back the defaults so a fresh install works without any setup.
//!
//! ```rust,no_run
//! use orgnice::libs::config::Config;
//! use orgnice::libs::data_storage::DataStorage;
//!
//! let storage = DataStorage::new();
//! storage.init()?;
//! let config = Config::read(&storage)?;
//! let db_path = config.database_path(&storage);
//! # Ok::<(), orgnice::libs::error::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::msg_debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_DB_FILE_NAME: &str = "orgnice.db";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Database file name, relative to the application root.
    pub database: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: DEFAULT_DB_FILE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Loads `config.json` from the root, or the defaults if it is absent.
    pub fn read(storage: &DataStorage) -> Result<Config> {
        let path = storage.get_path(CONFIG_FILE_NAME);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                msg_debug!(Message::ConfigNotFoundUsingDefaults);
                return Ok(Config::default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        serde_json::from_str(&raw).map_err(|source| Error::Config { path, source })
    }

    /// Writes the configuration as pretty-printed JSON and returns its path.
    pub fn save(&self, storage: &DataStorage) -> Result<PathBuf> {
        let path = storage.get_path(CONFIG_FILE_NAME);
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Config { path: path.clone(), source })?;
        fs::write(&path, json).map_err(|e| Error::io(&path, e))?;
        msg_debug!(Message::ConfigSaved(path.clone()));
        Ok(path)
    }

    pub fn database_path(&self, storage: &DataStorage) -> PathBuf {
        storage.get_path(&self.database)
    }
}
