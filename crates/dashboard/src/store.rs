//! Live widget state for the dashboard workspace

use layout_engine::RecipeSet;
use widget_model::{Layout, Position, Size, Widget, WidgetId, WidgetPayload, WidgetType};

/// Ordered, mutable widget state with unsaved-change tracking.
///
/// All mutations are synchronous and apply in call order. Mutations that
/// address an unknown widget id are silent no-ops; they indicate stale event
/// wiring, not user-actionable failures. No two widgets ever share an id.
#[derive(Debug, Default)]
pub struct WidgetStore {
    widgets: Vec<Widget>,
    /// Sequence captured at the last successful save or load
    baseline: Vec<Widget>,
    recipe_index: usize,
}

impl WidgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widgets in insertion order
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, id: &WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|widget| &widget.id == id)
    }

    /// Current position in the arrangement-recipe rotation
    pub fn recipe_index(&self) -> usize {
        self.recipe_index
    }

    /// Add a widget of the given type at its default placement
    pub fn add(&mut self, widget_type: WidgetType) -> WidgetId {
        self.add_widget(Widget::new(widget_type))
    }

    /// Add a widget carrying the provided payload. A payload whose variant
    /// does not match the widget type is replaced by the type's default.
    pub fn add_with_payload(&mut self, widget_type: WidgetType, payload: WidgetPayload) -> WidgetId {
        let mut widget = Widget::new(widget_type);
        if payload.widget_type() == widget_type {
            widget.payload = payload;
        }
        self.add_widget(widget)
    }

    /// Add a prepared widget, filling in default geometry where absent and
    /// regenerating the id until it is unique within the store
    pub fn add_widget(&mut self, mut widget: Widget) -> WidgetId {
        while self.get(&widget.id).is_some() {
            widget.id = WidgetId::generate();
        }
        if widget.position.is_none() {
            widget.position = Some(layout_engine::default_position());
        }
        if widget.size.is_none() {
            widget.size = Some(layout_engine::default_size(widget.widget_type));
        }
        let id = widget.id.clone();
        self.widgets.push(widget);
        id
    }

    /// Remove the widget with the given id; no-op when absent
    pub fn remove(&mut self, id: &WidgetId) {
        self.widgets.retain(|widget| &widget.id != id);
    }

    /// Update a widget's position; no-op when the id is unknown
    pub fn move_widget(&mut self, id: &WidgetId, position: Position) {
        if let Some(widget) = self.widgets.iter_mut().find(|widget| &widget.id == id) {
            widget.position = Some(position);
        }
    }

    /// Update a widget's size; no-op when the id is unknown
    pub fn resize(&mut self, id: &WidgetId, size: Size) {
        if let Some(widget) = self.widgets.iter_mut().find(|widget| &widget.id == id) {
            widget.size = Some(size);
        }
    }

    /// Whether the widget sequence differs from the last saved/loaded state
    pub fn is_dirty(&self) -> bool {
        self.widgets != self.baseline
    }

    /// Replace the whole sequence with a fresh-id copy of the layout's
    /// widgets and clear the dirty state.
    ///
    /// Every widget is re-assigned a generated id, so ids never collide with
    /// previously live widgets, and a malformed layout carrying duplicate
    /// ids still loads as distinct widgets.
    pub fn load_from(&mut self, layout: &Layout) {
        let mut widgets: Vec<Widget> = Vec::with_capacity(layout.widgets.len());
        for source in &layout.widgets {
            let mut widget = source.with_fresh_id();
            while widgets.iter().any(|existing| existing.id == widget.id) {
                widget.id = WidgetId::generate();
            }
            widgets.push(widget);
        }
        tracing::debug!(layout = %layout.id, widgets = widgets.len(), "loaded layout");
        self.widgets = widgets;
        self.baseline = self.widgets.clone();
    }

    /// Re-capture the baseline after the current sequence was persisted
    pub fn mark_saved(&mut self) {
        self.baseline = self.widgets.clone();
    }

    /// Rotate to the next arrangement recipe and re-place every widget
    pub fn cycle_layout(&mut self, recipes: &RecipeSet) {
        let (next, arranged) = recipes.advance(self.recipe_index, &self.widgets);
        tracing::debug!(recipe = recipes.recipe(next).name(), "cycled arrangement");
        self.recipe_index = next;
        self.widgets = arranged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_with(widgets: Vec<Widget>) -> Layout {
        Layout::snapshot("test", None, &widgets)
    }

    #[test]
    fn test_add_assigns_default_geometry() {
        let mut store = WidgetStore::new();
        let id = store.add(WidgetType::Chat);

        let widget = store.get(&id).unwrap();
        assert_eq!(widget.position, Some(layout_engine::default_position()));
        assert_eq!(
            widget.size,
            Some(layout_engine::default_size(WidgetType::Chat))
        );
        assert!(store.is_dirty());
    }

    #[test]
    fn test_add_with_payload() {
        let mut store = WidgetStore::new();
        let id = store.add_with_payload(
            WidgetType::Media,
            WidgetPayload::Media {
                default_images: vec!["https://example.com/a.png".to_string()],
            },
        );
        assert_eq!(
            store.get(&id).unwrap().payload,
            WidgetPayload::Media {
                default_images: vec!["https://example.com/a.png".to_string()]
            }
        );

        // a mismatched payload falls back to the type default
        let clock = store.add_with_payload(WidgetType::Clock, WidgetPayload::Radio);
        assert_eq!(store.get(&clock).unwrap().payload, WidgetPayload::Clock);
    }

    #[test]
    fn test_add_widget_regenerates_colliding_id() {
        let mut store = WidgetStore::new();
        let first = store.add_widget(Widget::new(WidgetType::Clock).with_id("w1".into()));
        let second = store.add_widget(Widget::new(WidgetType::Radio).with_id("w1".into()));

        assert_eq!(first.as_str(), "w1");
        assert_ne!(second, first);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut store = WidgetStore::new();
        store.add(WidgetType::Tasks);
        let before: Vec<Widget> = store.widgets().to_vec();

        store.remove(&WidgetId::from_raw("nonexistent"));
        assert_eq!(store.widgets(), &before[..]);
    }

    #[test]
    fn test_move_and_resize_address_only_their_widget() {
        let mut store = WidgetStore::new();
        let a = store.add(WidgetType::Chat);
        let b = store.add(WidgetType::Tasks);

        store.move_widget(&a, Position::new(100.0, 200.0));
        store.resize(&b, Size::new(400.0, 300.0));

        assert_eq!(store.get(&a).unwrap().position, Some(Position::new(100.0, 200.0)));
        assert_eq!(
            store.get(&b).unwrap().position,
            Some(layout_engine::default_position())
        );
        assert_eq!(store.get(&b).unwrap().size, Some(Size::new(400.0, 300.0)));

        // unknown ids fall through silently
        store.move_widget(&WidgetId::from_raw("ghost"), Position::new(0.0, 0.0));
        store.resize(&WidgetId::from_raw("ghost"), Size::new(1.0, 1.0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_dirty_tracks_divergence_from_baseline() {
        let mut store = WidgetStore::new();
        store.load_from(&layout_with(vec![Widget::new(WidgetType::Clock)
            .with_position(Position::new(40.0, 40.0))]));
        assert!(!store.is_dirty());

        let id = store.widgets()[0].id.clone();
        store.move_widget(&id, Position::new(80.0, 40.0));
        assert!(store.is_dirty());

        // moving back to the loaded geometry reports clean again
        store.move_widget(&id, Position::new(40.0, 40.0));
        assert!(!store.is_dirty());

        store.move_widget(&id, Position::new(80.0, 40.0));
        store.mark_saved();
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_load_from_regenerates_ids() {
        let source = layout_with(vec![
            Widget::new(WidgetType::Chat).with_id("a".into()),
            Widget::new(WidgetType::Tasks).with_id("b".into()),
        ]);
        let mut store = WidgetStore::new();
        store.load_from(&source);

        assert_eq!(store.len(), 2);
        for (loaded, original) in store.widgets().iter().zip(&source.widgets) {
            assert_ne!(loaded.id, original.id);
            assert_eq!(loaded.widget_type, original.widget_type);
            assert_eq!(loaded.payload, original.payload);
        }
    }

    #[test]
    fn test_load_from_duplicate_ids_yields_distinct_widgets() {
        let source = layout_with(vec![
            Widget::new(WidgetType::Media).with_id("w1".into()),
            Widget::new(WidgetType::Clock).with_id("w1".into()),
        ]);
        let mut store = WidgetStore::new();
        store.load_from(&source);

        assert_eq!(store.len(), 2);
        assert_ne!(store.widgets()[0].id, store.widgets()[1].id);
    }

    #[test]
    fn test_cycle_layout_advances_rotation() {
        let recipes = RecipeSet::builtin();
        let mut store = WidgetStore::new();
        store.add(WidgetType::Chat);
        store.add(WidgetType::Tasks);

        assert_eq!(store.recipe_index(), 0);
        store.cycle_layout(&recipes);
        assert_eq!(store.recipe_index(), 1);

        for _ in 0..recipes.len() - 1 {
            store.cycle_layout(&recipes);
        }
        assert_eq!(store.recipe_index(), 0);
    }
}
