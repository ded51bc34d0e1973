//! Application configuration.
//!
//! Settings are kept as pretty-printed JSON in `config.json` inside the
//! platform data directory (see [`DataStorage`]). A missing file is not an
//! error: the defaults are used until `todolist init` writes one.
//!
//! ```rust,no_run
//! use todolist::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.database = "work.db".to_string();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::task::Category;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name, relative to the data directory.
pub const DB_FILE_NAME: &str = "todolist.db";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Database file name (relative to the data directory) or absolute path.
    #[serde(default = "default_database")]
    pub database: String,

    /// Category labels offered by the interactive prompts.
    ///
    /// These are suggestions only; the store accepts any text.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_database() -> String {
    DB_FILE_NAME.to_string()
}

fn default_categories() -> Vec<String> {
    Category::ALL.iter().map(|category| category.label().to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: default_database(),
            categories: default_categories(),
        }
    }
}

impl Config {
    /// Reads the configuration from the platform data directory.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from `path`, falling back to defaults if it does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard, pre-filled with the current settings.
    pub fn init() -> Result<Config> {
        let current = Config::read()?;
        msg_print!(Message::ConfigWizardHeader, true);

        let database: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabase.to_string())
            .default(current.database.clone())
            .interact_text()?;

        // Offer the built-in suggestions plus anything the user added by hand.
        let mut choices = default_categories();
        for category in &current.categories {
            if !choices.contains(category) {
                choices.push(category.clone());
            }
        }
        let checked: Vec<bool> = choices.iter().map(|choice| current.categories.contains(choice)).collect();
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectCategories.to_string())
            .items(&choices)
            .defaults(&checked)
            .interact()?;

        let config = Config {
            database,
            categories: selected.into_iter().map(|index| choices[index].clone()).collect(),
        };
        Ok(config)
    }
}
