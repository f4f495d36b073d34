//! Identity collaborator and storage selection
//!
//! The identity/session backend is external; this module defines the
//! interface the core consumes and the strategy that gates remote layout
//! sync on a user being present. Anonymous sessions stay on local storage.

use crate::backend::PersistenceBackend;
use crate::local_store::{KeyValueStorage, LocalStore};
use crate::remote_store::{RemoteStore, RowStoreClient};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Opaque user identifier assigned by the identity backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A signed-in user as reported by the identity backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub email: String,
}

/// Contract for the external identity/session backend
pub trait IdentityProvider: Send + Sync {
    /// The currently signed-in user, if any
    fn current_user(&self) -> Option<UserAccount>;
}

/// Broadcasts session changes to interested components.
///
/// The identity backend calls `publish` on sign-in/out; components hold a
/// subscribed receiver and react when the value changes.
pub struct SessionWatcher {
    tx: watch::Sender<Option<UserAccount>>,
}

impl SessionWatcher {
    pub fn new(initial: Option<UserAccount>) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Current session snapshot
    pub fn current(&self) -> Option<UserAccount> {
        self.tx.borrow().clone()
    }

    /// Publish a session change
    pub fn publish(&self, user: Option<UserAccount>) {
        self.tx.send_replace(user);
    }

    /// Subscribe to session changes
    pub fn subscribe(&self) -> watch::Receiver<Option<UserAccount>> {
        self.tx.subscribe()
    }
}

impl Default for SessionWatcher {
    fn default() -> Self {
        Self::new(None)
    }
}

impl IdentityProvider for SessionWatcher {
    fn current_user(&self) -> Option<UserAccount> {
        self.current()
    }
}

/// Pick the layout backend for the current session: the remote row store
/// when a user is signed in, local key-value storage otherwise
pub fn select_backend<C, S>(
    provider: &dyn IdentityProvider,
    client: C,
    storage: S,
) -> Box<dyn PersistenceBackend>
where
    C: RowStoreClient + 'static,
    S: KeyValueStorage + 'static,
{
    match provider.current_user() {
        Some(user) => Box::new(RemoteStore::new(client, user.id)),
        None => Box::new(LocalStore::new(storage)),
    }
}
