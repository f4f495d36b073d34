//! Error types for the layout engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutEngineError {
    #[error("Recipe set must contain at least one recipe")]
    EmptyRecipeSet,
}

pub type Result<T> = std::result::Result<T, LayoutEngineError>;
