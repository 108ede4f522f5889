//! Owner domain model.

use serde::{Deserialize, Serialize};

/// A registered actor who can hold tasks.
///
/// Owners are immutable once created; the repository stores a copy and hands
/// out copies, so there is no way to change a stored owner in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Unique identifier of the owner.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form role tag (e.g. "admin", "user").
    pub role: String,
}

impl Owner {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
        }
    }
}
