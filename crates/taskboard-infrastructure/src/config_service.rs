//! Configuration service implementation.
//!
//! Loads [`TaskboardConfig`] from `config.toml`. A missing file is not an
//! error: the defaults are used instead.

use crate::paths::TaskboardPaths;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use taskboard_core::config::TaskboardConfig;
use taskboard_core::error::Result;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration, filled on first successful load.
    config: Arc<RwLock<Option<TaskboardConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService for the default location
    /// (`<config dir>/taskboard/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(TaskboardPaths::config_file()?))
    }

    /// Creates a ConfigService reading from a custom path (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the configuration, reading the file if it is not cached.
    ///
    /// # Errors
    ///
    /// - `TaskboardError::Io` if the file exists but cannot be read
    /// - `TaskboardError::Serialization` if the file is not valid TOML for
    ///   [`TaskboardConfig`]
    pub fn load(&self) -> Result<TaskboardConfig> {
        {
            let cached = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = self.read_from_disk()?;

        let mut cached = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cached = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cached = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cached = None;
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<TaskboardConfig> {
        Ok(toml::from_str(content)?)
    }

    fn read_from_disk(&self) -> Result<TaskboardConfig> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "Config file not found, using defaults"
                );
                return Ok(TaskboardConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %self.path.display(), "Loaded configuration");
        Ok(config)
    }
}
