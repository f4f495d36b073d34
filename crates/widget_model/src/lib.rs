//! Widget Model - Core dashboard data types
//!
//! This crate provides the foundational data model for the widget dashboard:
//! stable string-backed ids, pixel geometry, the fixed widget roster with
//! type-keyed payloads, and named widget layouts.

mod error;
mod geometry;
mod layout;
mod widget;
mod widget_id;

pub use error::*;
pub use geometry::*;
pub use layout::*;
pub use widget::*;
pub use widget_id::*;
