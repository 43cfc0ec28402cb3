//! Application configuration.
//!
//! Stored as pretty-printed JSON in the data directory:
//!
//! ```json
//! {
//!   "report": {
//!     "author": "Jane Doe",
//!     "output_dir": "/home/jane/Documents/reports"
//!   }
//! }
//! ```
//!
//! A missing file is not an error; every setting has a usable default.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Settings for generated report files.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ReportConfig {
    /// Name placed in export file names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Directory exports are written to when no output path is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| anyhow::anyhow!(Message::ConfigParseError(e.to_string())))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path).with_context(|| Message::ConfigSaveError(path.display().to_string()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns false when there was none.
    pub fn delete_at(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    pub fn delete() -> Result<bool> {
        Self::delete_at(&Self::path()?)
    }

    /// Interactive setup, pre-filled with the current settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.report.clone().unwrap_or_default();

        msg_print!(Message::ConfigPath(Self::path()?.display().to_string()));

        let author: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAuthor.to_string())
            .default(default.author.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let output_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptOutputDir.to_string())
            .default(default.output_dir.map(|dir| dir.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        config.report = Some(ReportConfig {
            author: Some(author.trim().to_string()).filter(|s| !s.is_empty()),
            output_dir: Some(output_dir.trim()).filter(|s| !s.is_empty()).map(PathBuf::from),
        });

        Ok(config)
    }

    pub fn author(&self) -> Option<&str> {
        self.report.as_ref().and_then(|report| report.author.as_deref())
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.report.as_ref().and_then(|report| report.output_dir.as_deref())
    }
}
