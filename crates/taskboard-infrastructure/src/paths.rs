//! Path management for taskboard configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/taskboard/         # Config directory (platform config dir)
//! └── config.toml              # Application configuration
//! ```

use std::path::PathBuf;
use taskboard_core::error::{Result, TaskboardError};

const APP_DIR_NAME: &str = "taskboard";
const CONFIG_FILE_NAME: &str = "config.toml";

pub struct TaskboardPaths;

impl TaskboardPaths {
    /// Returns the taskboard configuration directory (e.g. `~/.config/taskboard/`).
    fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| TaskboardError::config("Cannot find config directory"))
    }

    /// Returns the path of `config.toml` inside the config directory.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }
}
