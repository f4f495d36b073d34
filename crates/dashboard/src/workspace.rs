//! Aggregated workspace context
//!
//! Bundles the live components the dashboard surface works with. The
//! context is constructed once at application start and passed by
//! reference into whatever needs it; nothing in this crate lives in a
//! global.

use crate::{InteractionController, Viewport, WidgetStore};
use layout_engine::RecipeSet;
use widget_model::{Position, WidgetId};

/// The live state behind a dashboard surface
pub struct Workspace {
    pub store: WidgetStore,
    pub viewport: Viewport,
    pub interaction: InteractionController,
    recipes: RecipeSet,
}

impl Workspace {
    /// Create a workspace with the built-in recipe rotation
    pub fn new() -> Self {
        Self::with_recipes(RecipeSet::builtin())
    }

    pub fn with_recipes(recipes: RecipeSet) -> Self {
        Self {
            store: WidgetStore::new(),
            viewport: Viewport::new(),
            interaction: InteractionController::new(),
            recipes,
        }
    }

    pub fn recipes(&self) -> &RecipeSet {
        &self.recipes
    }

    /// Rotate the widgets through the next arrangement recipe
    pub fn cycle_layout(&mut self) {
        self.store.cycle_layout(&self.recipes);
    }

    /// Begin dragging a widget; see [`InteractionController::begin_drag`]
    pub fn begin_drag(&mut self, id: &WidgetId, pointer: Position) -> bool {
        self.interaction
            .begin_drag(&self.store, &self.viewport, id, pointer)
    }

    /// Begin resizing a widget; see [`InteractionController::begin_resize`]
    pub fn begin_resize(&mut self, id: &WidgetId, pointer: Position) -> bool {
        self.interaction
            .begin_resize(&self.store, &self.viewport, id, pointer)
    }

    /// Route a pointer-move event to the active gesture
    pub fn pointer_moved(&mut self, pointer: Position) {
        self.interaction
            .pointer_moved(&mut self.store, &self.viewport, pointer);
    }

    /// Commit the active gesture
    pub fn finish_gesture(&mut self) {
        self.interaction.finish(&mut self.store);
    }

    /// Abort the active gesture, restoring pre-gesture geometry
    pub fn cancel_gesture(&mut self) {
        self.interaction.cancel(&mut self.store);
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
