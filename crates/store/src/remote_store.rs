//! Remote row-store layout backend
//!
//! The row store itself is an external collaborator; this module defines the
//! client contract and adapts it to `PersistenceBackend` for signed-in
//! sessions. Failures are transient from the core's point of view: nothing
//! in memory is touched, the dirty flag stays set, and the user retries by
//! saving again.

use crate::backend::PersistenceBackend;
use crate::format::StoredLayout;
use crate::session::UserId;
use crate::Result;
use widget_model::LayoutId;

/// Client contract for the layouts table of the external row store.
///
/// Layout records are scoped per user; `list_layouts` returns them in
/// descending `created_at` order.
pub trait RowStoreClient: Send + Sync {
    fn list_layouts(&self, user: &UserId) -> Result<Vec<StoredLayout>>;

    fn create_layout(&self, user: &UserId, layout: &StoredLayout) -> Result<()>;

    fn update_layout(&self, user: &UserId, id: &LayoutId, layout: &StoredLayout) -> Result<()>;

    fn delete_layout(&self, user: &UserId, id: &LayoutId) -> Result<()>;
}

/// Layout backend over a remote row store, bound to the signed-in user
pub struct RemoteStore<C: RowStoreClient> {
    client: C,
    user: UserId,
}

impl<C: RowStoreClient> RemoteStore<C> {
    pub fn new(client: C, user: UserId) -> Self {
        Self { client, user }
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }
}

impl<C: RowStoreClient> PersistenceBackend for RemoteStore<C> {
    fn list(&self) -> Result<Vec<StoredLayout>> {
        self.client.list_layouts(&self.user)
    }

    fn create(&self, layout: &StoredLayout) -> Result<()> {
        self.client.create_layout(&self.user, layout)
    }

    fn update(&self, id: &LayoutId, layout: &StoredLayout) -> Result<()> {
        self.client.update_layout(&self.user, id, layout)
    }

    fn delete(&self, id: &LayoutId) -> Result<()> {
        self.client.delete_layout(&self.user, id)
    }
}
