//! Fixed-unit column grid and coordinate math
//!
//! The dashboard is placed on a 12-column grid derived from a fixed
//! reference container. All values here are computed from the constants on
//! every call; nothing is accumulated across calls, so repeated conversions
//! cannot drift.

use widget_model::{Position, Size, Widget, WidgetType};

/// Gap between adjacent grid columns, in pixels
pub const GRID_GAP: f64 = 20.0;

/// Padding between the container edge and the outermost columns
pub const CONTAINER_PADDING: f64 = 40.0;

/// Reference container width the column grid is derived from
pub const CONTAINER_WIDTH: f64 = 1200.0;

/// Number of grid columns
pub const COLUMN_COUNT: u32 = 12;

/// Fine-grained snap unit for free-form widget placement
pub const GRID_SIZE: f64 = 10.0;

const USABLE_WIDTH: f64 = CONTAINER_WIDTH - 2.0 * CONTAINER_PADDING;

/// Width of a single grid column
pub const COLUMN_WIDTH: f64 =
    (USABLE_WIDTH - GRID_GAP * (COLUMN_COUNT as f64 - 1.0)) / COLUMN_COUNT as f64;

/// Pixel offset of the left edge of the given column
pub fn column_position(column: u32) -> f64 {
    CONTAINER_PADDING + column as f64 * COLUMN_WIDTH + column as f64 * GRID_GAP
}

/// Pixel width spanned by `columns` adjacent columns, including inner gaps
pub fn width_for_columns(columns: u32) -> f64 {
    columns as f64 * COLUMN_WIDTH + columns.saturating_sub(1) as f64 * GRID_GAP
}

/// Default size for each widget type
pub fn default_size(widget_type: WidgetType) -> Size {
    match widget_type {
        WidgetType::Chat => Size::new(width_for_columns(6), 320.0),
        WidgetType::Media => Size::new(width_for_columns(6), 200.0),
        WidgetType::Clock => Size::new(width_for_columns(3), 160.0),
        WidgetType::Radio => Size::new(width_for_columns(3), 160.0),
        WidgetType::Tasks => Size::new(width_for_columns(6), 200.0),
    }
}

/// Anchor used when a widget carries no explicit position
pub fn default_position() -> Position {
    Position::new(CONTAINER_PADDING, CONTAINER_PADDING)
}

/// Round a free-form position to the nearest snap-grid point
pub fn snap_to_grid(position: Position) -> Position {
    Position::new(
        (position.x / GRID_SIZE).round() * GRID_SIZE,
        (position.y / GRID_SIZE).round() * GRID_SIZE,
    )
}

/// Widget position, or the default anchor when unset
pub fn effective_position(widget: &Widget) -> Position {
    widget.position.unwrap_or_else(default_position)
}

/// Widget size, or the type default when unset
pub fn effective_size(widget: &Widget) -> Size {
    widget.size.unwrap_or_else(|| default_size(widget.widget_type))
}
