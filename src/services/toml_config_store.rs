use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, RunConfig};
use crate::ports::ConfigStore;

/// Directory holding kubegen state inside the output directory.
pub const CONFIG_DIR: &str = ".kubegen";

/// Run configuration file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Filesystem-based run configuration store.
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    root: PathBuf,
}

impl TomlConfigStore {
    /// Create a store for the given output directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_DIR).join(CONFIG_FILE)
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<Option<RunConfig>, AppError> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let config = RunConfig::parse_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded run configuration");
        Ok(Some(config))
    }

    fn save(&self, config: &RunConfig) -> Result<(), AppError> {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, config.to_toml()?)?;
        tracing::debug!(path = %path.display(), "saved run configuration");
        Ok(())
    }
}
