//! Configuration loading and management
//!
//! Handles parsing of the `config.toml` configuration file. A missing or
//! unreadable file falls back to defaults; a present-but-invalid file is
//! surfaced as [`Error::InvalidConfig`] when loaded explicitly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::query::StatusFilter;
use crate::task::{Category, Priority};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Override for the task data file location
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Defaults applied to new tasks
    #[serde(default)]
    pub new_task: NewTaskConfig,

    /// List command configuration
    #[serde(default)]
    pub list: ListConfig,
}

/// Defaults for `taskflow add`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTaskConfig {
    /// Default priority when none specified
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Default category when none specified
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_priority() -> String {
    "medium".to_string()
}

fn default_category() -> String {
    "general".to_string()
}

impl Default for NewTaskConfig {
    fn default() -> Self {
        Self {
            priority: default_priority(),
            category: default_category(),
        }
    }
}

/// Defaults for `taskflow list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Default status filter
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Default page size
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_filter() -> String {
    "all".to_string()
}

fn default_limit() -> usize {
    50
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            limit: default_limit(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the given path, or return defaults when the
    /// file is missing or does not parse.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "ignoring invalid config");
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default priority for new tasks, parsed.
    pub fn default_priority(&self) -> Result<Priority> {
        self.new_task.priority.parse()
    }

    /// Default category for new tasks, parsed.
    pub fn default_category(&self) -> Result<Category> {
        self.new_task.category.parse()
    }

    /// Default status filter for listings, parsed.
    pub fn default_filter(&self) -> Result<StatusFilter> {
        self.list.filter.parse()
    }

    fn validate(&self) -> Result<()> {
        self.new_task
            .priority
            .parse::<Priority>()
            .map_err(|_| invalid("new_task.priority", &self.new_task.priority))?;
        self.new_task
            .category
            .parse::<Category>()
            .map_err(|_| invalid("new_task.category", &self.new_task.category))?;
        self.list
            .filter
            .parse::<StatusFilter>()
            .map_err(|_| invalid("list.filter", &self.list.filter))?;
        if self.list.limit == 0 {
            return Err(Error::InvalidConfig("list.limit must be > 0".to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: &str) -> Error {
    Error::InvalidConfig(format!("{field}: invalid value '{value}'"))
}
