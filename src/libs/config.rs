//! Configuration management for the tache application.
//!
//! Settings live in `config.json` inside the per-user data directory
//! (see [`DataStorage`]). A missing file is not an error: every section is
//! optional and falls back to its defaults.
//!
//! ## Sections
//!
//! - **database**: location of the SQLite file
//! - **views**: window sizes of the `week` and `urgent` task views
//!
//! ```rust,no_run
//! use tache::libs::config::Config;
//!
//! let config = Config::read()?;
//! let views = config.views_or_default();
//! println!("urgent window: {} days", views.urgent_days);
//! # Ok::<(), tache::libs::error::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::error::Result;
use super::messages::Message;
use crate::{msg_error, msg_print};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "tasks.db";

/// Overrides the database location regardless of the configuration file.
pub const DB_PATH_ENV: &str = "TACHE_DB";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ViewsConfig {
    /// Days ahead of today a pending task counts as urgent.
    pub urgent_days: u32,

    /// Days ahead of today covered by the week view.
    pub week_days: u32,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        ViewsConfig {
            urgent_days: 3,
            week_days: 7,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<ViewsConfig>,
}

impl Config {
    /// Loads `config.json`, or the default configuration when the file does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Database file location: `TACHE_DB`, then the configured path, then the data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        if let Some(database) = &self.database {
            return Ok(database.path.clone());
        }
        Ok(DataStorage::new().get_path(DB_FILE_NAME)?)
    }

    /// Like [`Config::read`], but reports an unreadable file and falls back to the defaults.
    pub fn read_or_default() -> Config {
        match Self::read() {
            Ok(config) => config,
            Err(e) => {
                msg_error!(Message::ConfigReadFailed(e.to_string()));
                Config::default()
            }
        }
    }

    pub fn views_or_default(&self) -> ViewsConfig {
        self.views.clone().unwrap_or_default()
    }

    /// Interactive setup wizard; current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read_or_default();

        let modules = [Message::ConfigModuleDatabase.to_string(), Message::ConfigModuleViews.to_string()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for selection in selected {
            match selection {
                0 => {
                    msg_print!(Message::ConfigModuleDatabase);
                    let default_path = match &config.database {
                        Some(database) => database.path.clone(),
                        None => DataStorage::new().get_path(DB_FILE_NAME)?,
                    };
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(default_path.display().to_string())
                        .interact_text()?;
                    config.database = Some(DatabaseConfig { path: PathBuf::from(path) });
                }
                1 => {
                    msg_print!(Message::ConfigModuleViews);
                    let default = config.views_or_default();
                    config.views = Some(ViewsConfig {
                        urgent_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUrgentDays.to_string())
                            .default(default.urgent_days)
                            .interact_text()?,
                        week_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptWeekDays.to_string())
                            .default(default.week_days)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
