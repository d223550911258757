//! Storage paths and file IO for taskflow.
//!
//! The data file is a single JSON array of tasks. Its location resolves in
//! order: explicit `--data` flag, `TASKFLOW_DATA` env (handled by clap),
//! config override, then the platform data directory
//! (e.g. `~/.local/share/taskflow/tasks.json` on Linux).

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

/// File name of the task data file inside the data directory.
pub const DATA_FILE: &str = "tasks.json";

/// File name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the task data file path.
pub fn resolve_data_file(flag: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = &config.data_file {
        return Ok(path.clone());
    }
    let dirs = project_dirs()?;
    Ok(dirs.data_dir().join(DATA_FILE))
}

/// Default config file path (`TASKFLOW_CONFIG` overrides it).
pub fn default_config_file() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("TASKFLOW_CONFIG") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }
    let dirs = project_dirs()?;
    Ok(dirs.config_dir().join(CONFIG_FILE))
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "taskflow").ok_or_else(|| {
        Error::Persistence("could not determine a home directory for taskflow data".to_string())
    })
}

/// Write JSON data atomically (write to temp, then rename).
///
/// Readers never see a partial write; the file is either the old content or
/// the new content.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    write_atomic(path, json.as_bytes())
}

/// Read JSON data from a file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&content)?;
    Ok(data)
}

/// Write bytes atomically using temp file + rename.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;
    Ok(())
}
