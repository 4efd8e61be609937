use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TaskflowError;

/// Persisted next to the database as `config.json`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Email of the user `me()` answers for. `None` after logout.
    #[serde(default)]
    pub session_email: Option<String>,
}

impl Config {
    /// Missing file means defaults; a file that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self, TaskflowError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content).map_err(|e| {
            TaskflowError::config(format!("Invalid config at {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), TaskflowError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
