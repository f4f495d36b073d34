//! Storage backend abstraction for persisted layouts
//!
//! This module defines the `PersistenceBackend` trait that gives the layout
//! service a unified interface over storage mechanisms. Implementations can
//! persist to local key-value storage or to a remote row store; the service
//! never hardcodes either.

use crate::format::StoredLayout;
use crate::Result;
use widget_model::LayoutId;

/// Trait for layout persistence backends
///
/// Implementations persist the user's named layouts. The built-in default
/// layout never passes through a backend; callers filter it out before
/// writing.
///
/// # Thread Safety
///
/// Methods take `&self` to allow internal mutability patterns (`Mutex` or
/// `RwLock`) in implementations that are shared across threads.
pub trait PersistenceBackend: Send + Sync {
    /// All stored layouts in backend order
    fn list(&self) -> Result<Vec<StoredLayout>>;

    /// Persist a new layout record
    fn create(&self, layout: &StoredLayout) -> Result<()>;

    /// Replace the record with the given id
    ///
    /// Fails with `LayoutNotFound` when no record has that id.
    fn update(&self, id: &LayoutId, layout: &StoredLayout) -> Result<()>;

    /// Remove the record with the given id; removing an unknown id is a
    /// no-op, not an error
    fn delete(&self, id: &LayoutId) -> Result<()>;

    /// Whether a record with the given id exists
    fn contains(&self, id: &LayoutId) -> Result<bool> {
        Ok(self.list()?.iter().any(|layout| &layout.id == id))
    }
}
