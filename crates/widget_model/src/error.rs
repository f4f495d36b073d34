//! Error types for the widget model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetModelError {
    #[error("Unknown widget type: {0}")]
    UnknownWidgetType(String),
}

pub type Result<T> = std::result::Result<T, WidgetModelError>;
