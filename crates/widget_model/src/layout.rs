//! Named widget layouts

use crate::{LayoutId, Widget};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, ordered collection of widgets persisted as a unit.
///
/// Layouts are only ever mutated by explicit save/delete/apply operations.
/// The layout with the reserved `"default"` id is synthesized at load time,
/// never persisted, and can never be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub id: LayoutId,
    pub name: String,
    pub description: Option<String>,
    pub widgets: Vec<Widget>,
    pub created_at: DateTime<Utc>,
}

impl Layout {
    /// Snapshot a widget sequence into a new layout.
    ///
    /// The widget list is deep-copied under a freshly generated layout id
    /// and the current timestamp; the live widgets share nothing with the
    /// snapshot.
    pub fn snapshot(
        name: impl Into<String>,
        description: Option<String>,
        widgets: &[Widget],
    ) -> Self {
        Self {
            id: LayoutId::generate(),
            name: name.into(),
            description,
            widgets: widgets.to_vec(),
            created_at: Utc::now(),
        }
    }

    /// Whether this is the built-in protected layout
    pub fn is_default(&self) -> bool {
        self.id.is_default()
    }
}
