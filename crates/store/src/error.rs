//! Error types for layout persistence

use thiserror::Error;
use widget_model::LayoutId;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The built-in default layout is never stored and can never be
    /// overwritten or deleted
    #[error("The default layout is protected and cannot be modified")]
    ProtectedLayout,

    #[error("Layout not found: {0}")]
    LayoutNotFound(LayoutId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transient remote backend failure; in-memory state is untouched and
    /// the caller retries explicitly
    #[error("Remote backend error: {0}")]
    Remote(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
