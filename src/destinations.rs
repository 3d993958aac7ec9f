use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a single overflow-menu destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DestinationId(String);

impl DestinationId {
    /// Create a new unique destination identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Rehydrate a destination identifier from a stored string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DestinationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DestinationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One reorderable entry in the overflow menu.
///
/// Entries live in exactly one of the model's two ordered lists; `shown`
/// mirrors which one. The model keeps the flag and the membership in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub title: String,
    pub shown: bool,
}

impl Destination {
    /// Create a new shown destination with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: DestinationId::new(),
            title: title.into(),
            shown: true,
        }
    }

    /// Create a destination with an existing id (used when re-attaching a
    /// known menu layout).
    pub fn new_with_id(id: DestinationId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            shown: true,
        }
    }
}
