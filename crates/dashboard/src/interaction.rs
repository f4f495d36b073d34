//! Drag and resize interaction state machine
//!
//! Pointer gestures translate into continuous move/resize proposals against
//! the widget store: `Idle -> Dragging -> Idle` and `Idle -> Resizing ->
//! Idle`, mutually exclusive, both suppressed while the workspace is being
//! panned. Finishing a gesture commits the proposed geometry; cancelling
//! restores the geometry captured when the gesture began. No persistence
//! I/O happens on any transition.

use crate::{Viewport, WidgetStore};
use widget_model::{Position, Size, WidgetId};

/// Smallest size a resize gesture can reach
pub const MIN_WIDGET_SIZE: Size = Size {
    width: 120.0,
    height: 80.0,
};

/// Current interaction of the pointer with the workspace
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    Idle,
    Dragging {
        id: WidgetId,
        /// Committed position when the gesture began
        origin: Position,
        /// Screen position of the initiating pointer-down
        pointer_start: Position,
    },
    Resizing {
        id: WidgetId,
        /// Committed size when the gesture began
        origin: Size,
        pointer_start: Position,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Translates pointer gestures into widget geometry proposals
#[derive(Debug)]
pub struct InteractionController {
    state: InteractionState,
    snap_on_release: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self {
            state: InteractionState::Idle,
            snap_on_release: true,
        }
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Whether a released drag snaps the widget to the fine grid
    pub fn set_snap_on_release(&mut self, enabled: bool) {
        self.snap_on_release = enabled;
    }

    /// Begin dragging a widget from its drag handle.
    ///
    /// Refused (returns false) while the workspace is panning, while another
    /// gesture is active, or when the id is unknown.
    pub fn begin_drag(
        &mut self,
        store: &WidgetStore,
        viewport: &Viewport,
        id: &WidgetId,
        pointer: Position,
    ) -> bool {
        if !self.state.is_idle() || viewport.is_panning() {
            return false;
        }
        let Some(widget) = store.get(id) else {
            return false;
        };
        self.state = InteractionState::Dragging {
            id: id.clone(),
            origin: layout_engine::effective_position(widget),
            pointer_start: pointer,
        };
        true
    }

    /// Begin resizing a widget from its resize handle; same guards as
    /// [`begin_drag`](Self::begin_drag)
    pub fn begin_resize(
        &mut self,
        store: &WidgetStore,
        viewport: &Viewport,
        id: &WidgetId,
        pointer: Position,
    ) -> bool {
        if !self.state.is_idle() || viewport.is_panning() {
            return false;
        }
        let Some(widget) = store.get(id) else {
            return false;
        };
        self.state = InteractionState::Resizing {
            id: id.clone(),
            origin: layout_engine::effective_size(widget),
            pointer_start: pointer,
        };
        true
    }

    /// Feed a pointer-move event, proposing updated geometry for the active
    /// gesture. Deltas are measured from the gesture origin and scaled by
    /// the viewport zoom, so each proposal is independent of the last.
    pub fn pointer_moved(
        &self,
        store: &mut WidgetStore,
        viewport: &Viewport,
        pointer: Position,
    ) {
        match &self.state {
            InteractionState::Idle => {}
            InteractionState::Dragging {
                id,
                origin,
                pointer_start,
            } => {
                let (dx, dy) = viewport
                    .delta_to_workspace(pointer.x - pointer_start.x, pointer.y - pointer_start.y);
                store.move_widget(id, origin.translated(dx, dy));
            }
            InteractionState::Resizing {
                id,
                origin,
                pointer_start,
            } => {
                let (dx, dy) = viewport
                    .delta_to_workspace(pointer.x - pointer_start.x, pointer.y - pointer_start.y);
                let size = Size::new(
                    (origin.width + dx).max(MIN_WIDGET_SIZE.width),
                    (origin.height + dy).max(MIN_WIDGET_SIZE.height),
                );
                store.resize(id, size);
            }
        }
    }

    /// Commit the active gesture on pointer-up, leaving the widget at its
    /// last proposed geometry (snapped to the fine grid when enabled)
    pub fn finish(&mut self, store: &mut WidgetStore) {
        match std::mem::replace(&mut self.state, InteractionState::Idle) {
            InteractionState::Idle => {}
            InteractionState::Dragging { id, .. } => {
                if self.snap_on_release {
                    if let Some(widget) = store.get(&id) {
                        let snapped =
                            layout_engine::snap_to_grid(layout_engine::effective_position(widget));
                        store.move_widget(&id, snapped);
                    }
                }
            }
            InteractionState::Resizing { .. } => {}
        }
    }

    /// Abort the active gesture, restoring the geometry captured at its
    /// start. Used when the host cancels the interaction (e.g. the pointer
    /// leaves the window).
    pub fn cancel(&mut self, store: &mut WidgetStore) {
        match std::mem::replace(&mut self.state, InteractionState::Idle) {
            InteractionState::Idle => {}
            InteractionState::Dragging { id, origin, .. } => store.move_widget(&id, origin),
            InteractionState::Resizing { id, origin, .. } => store.resize(&id, origin),
        }
    }
}
