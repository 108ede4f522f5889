//! Error types for the Taskboard application.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

/// A shared error type for every Taskboard layer.
///
/// Repositories, use cases and the configuration loader all return this type,
/// so callers can branch on the variant without downcasting.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskboardError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: Cow<'static, str>,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskboardError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: Cow::Borrowed(entity_type),
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<std::io::Error> for TaskboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for TaskboardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TaskboardError>`.
pub type Result<T> = std::result::Result<T, TaskboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = TaskboardError::not_found("task", "42");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: task '42'");
    }

    #[test]
    fn test_serde_round_trip() {
        let errors = vec![
            TaskboardError::not_found("owner", "o-1"),
            TaskboardError::io("disk full"),
            TaskboardError::Serialization {
                format: "TOML".to_string(),
                message: "bad value".to_string(),
            },
            TaskboardError::config("missing key"),
            TaskboardError::internal("boom"),
        ];

        for err in errors {
            let json = serde_json::to_string(&err).unwrap();
            let restored: TaskboardError = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, err);
        }
    }

    #[test]
    fn test_not_found_json_shape() {
        let json = serde_json::to_value(TaskboardError::not_found("task", "t-9")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "NotFound": { "entity_type": "task", "id": "t-9" } })
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("id_strategy = ").unwrap_err();
        let err: TaskboardError = parse_err.into();
        assert!(err.is_serialization());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TaskboardError = io_err.into();
        match err {
            TaskboardError::Io { message } => assert!(message.contains("PermissionDenied")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
