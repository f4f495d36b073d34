//! Widget and layout identifiers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reserved id of the built-in, protected layout
pub const DEFAULT_LAYOUT_ID: &str = "default";

/// Unique identifier for a widget within a layout.
///
/// Generated ids are UUID v4 strings, but the type is string-backed because
/// stored layouts may carry non-UUID ids (the built-in layout uses readable
/// ids such as `default-chat`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// Generate a new random widget id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create a widget id from an existing string
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WidgetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier for a stored layout.
///
/// The reserved value `"default"` denotes the built-in layout that is
/// synthesized at load time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(String);

impl LayoutId {
    /// Generate a new random layout id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The reserved id of the built-in layout
    pub fn default_layout() -> Self {
        Self(DEFAULT_LAYOUT_ID.to_string())
    }

    /// Create a layout id from an existing string
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Whether this is the reserved default-layout id
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LAYOUT_ID
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LayoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LayoutId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LayoutId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
