//! Data directory storage
//!
//! Directory structure:
//! ~/.fairvalue/
//!   config.yaml          # Default model, market price, position size
//!   consensus.json       # Saved consensus overrides
//!   interview.json       # Saved interview answers
//!   fairvalue.log

use std::fs;
use std::path::{Path, PathBuf};

use fairvalue_core::ValuationModel;

use super::config::AppConfig;
use super::state::SavedState;
use crate::util::atomic_write;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding config and saved sessions
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.fairvalue/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fairvalue")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path to config.yaml
    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    /// Get the path a model's session is saved under
    pub fn state_path(&self, model: &ValuationModel) -> PathBuf {
        self.root.join(model.state_file())
    }

    /// Initialize the data directory
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load the config file, falling back to defaults when it is absent
    pub fn load_config(&self) -> Result<AppConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Load a model's saved session.
    ///
    /// A missing file means there is no prior state and returns `Ok(None)`.
    pub fn load_state(&self, model: &ValuationModel) -> Result<Option<SavedState>, StorageError> {
        let path = self.state_path(model);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        SavedState::from_json(&content)
            .map(Some)
            .map_err(|e| StorageError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Save a model's session
    pub fn save_state(&self, model: &ValuationModel, state: &SavedState) -> Result<PathBuf, StorageError> {
        self.init()?;

        let json = state
            .to_json()
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize state: {}", e)))?;

        let path = self.state_path(model);
        atomic_write(&path, &json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), answers = state.overrides.len(), "Saved session");
        Ok(path)
    }
}
