//! Layout Engine - Grid coordinates and arrangement recipes
//!
//! This crate implements the fixed-unit column grid the dashboard is placed
//! on, per-type default geometry, and the deterministic arrangement recipes
//! that re-place the widget roster when the user cycles layouts.

mod error;
mod grid;
mod recipes;

pub use error::*;
pub use grid::*;
pub use recipes::*;
