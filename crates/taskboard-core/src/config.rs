//! Taskboard configuration model.

use serde::{Deserialize, Serialize};

/// How new entity identifiers are produced.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Random UUID v4 strings.
    #[default]
    Uuid,
    /// Monotonic decimal counter.
    Sequential,
}

/// Root configuration, read from `config.toml`.
///
/// Every field has a default, so a partial or empty file is valid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TaskboardConfig {
    pub id_strategy: IdStrategy,
    /// First value handed out by the sequential generator.
    pub sequential_start: u64,
    /// When set, creating a task for an unknown owner fails with `NotFound`.
    pub require_existing_owner: bool,
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_level: String,
}

impl Default for TaskboardConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            sequential_start: 1,
            require_existing_owner: false,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: TaskboardConfig = toml::from_str("").unwrap();
        assert_eq!(config, TaskboardConfig::default());
        assert_eq!(config.sequential_start, 1);
    }

    #[test]
    fn test_partial_document() {
        let config: TaskboardConfig = toml::from_str(
            r#"
            id_strategy = "sequential"
            require_existing_owner = true
            "#,
        )
        .unwrap();

        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert!(config.require_existing_owner);
        assert_eq!(config.log_level, "info");
    }
}
