//! Arrangement recipes for the widget roster
//!
//! A recipe is a deterministic function from a widget's slot index to a
//! position and size. Recipes are designed around the six-slot roster
//! (chat, two media panels, clock, radio, tasks) but stay total over any
//! slot: indices beyond a recipe's explicit cases fall back to the type's
//! default geometry at the default anchor.
//!
//! Recipes place widgets by their index in the sequence, not by id or type,
//! so callers must keep widget order stable across calls for the rotation
//! to behave predictably.

use crate::grid::{self, CONTAINER_PADDING, GRID_GAP};
use crate::{LayoutEngineError, Result};
use serde::{Deserialize, Serialize};
use widget_model::{Position, Size, Widget, WidgetType};

/// A computed slot placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub size: Size,
}

impl Placement {
    fn new(x: f64, y: f64, size: Size) -> Self {
        Self {
            position: Position::new(x, y),
            size,
        }
    }

    /// The defined fallback for slots a recipe does not explicitly place
    fn fallback(widget: &Widget) -> Self {
        Self {
            position: grid::default_position(),
            size: grid::default_size(widget.widget_type),
        }
    }
}

/// A deterministic arrangement mapping slot indices to placements
pub trait ArrangementRecipe: Send + Sync {
    /// Human-readable recipe name
    fn name(&self) -> &'static str;

    /// Compute the placement for the widget at `slot`. Total over any slot
    /// index; must not depend on widget identity or payload.
    fn place(&self, widget: &Widget, slot: usize) -> Placement;
}

/// Two-column arrangement: chat and a media panel stacked on the left,
/// everything else in the right column
pub struct StandardRecipe;

impl ArrangementRecipe for StandardRecipe {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn place(&self, widget: &Widget, slot: usize) -> Placement {
        let mut size = grid::default_size(widget.widget_type);
        let media_height = grid::default_size(WidgetType::Media).height;
        let mut x = grid::column_position(0);
        let mut y = CONTAINER_PADDING;
        match slot {
            0 => {}
            1 => x = grid::column_position(6),
            2 => y += size.height + GRID_GAP,
            3 => {
                x = grid::column_position(6);
                y += size.height + GRID_GAP;
            }
            4 => {
                x = grid::column_position(6);
                y += media_height + GRID_GAP;
                size = Size::new(grid::width_for_columns(3), 180.0);
            }
            5 => {
                x = grid::column_position(6);
                y += media_height + GRID_GAP * 3.0;
            }
            _ => return Placement::fallback(widget),
        }
        Placement::new(x, y, size)
    }
}

/// Three-column arrangement with the chat panel centered on top
pub struct ThreeColumnRecipe;

impl ArrangementRecipe for ThreeColumnRecipe {
    fn name(&self) -> &'static str {
        "three-column"
    }

    fn place(&self, widget: &Widget, slot: usize) -> Placement {
        let mut size = grid::default_size(widget.widget_type);
        let chat_height = grid::default_size(WidgetType::Chat).height;
        let media_height = grid::default_size(WidgetType::Media).height;
        let clock_height = grid::default_size(WidgetType::Clock).height;
        let mut x = grid::column_position(0);
        let mut y = CONTAINER_PADDING;
        match slot {
            0 => {
                x = grid::column_position(3);
                size = Size::new(grid::width_for_columns(6), 280.0);
            }
            1 => {
                y += chat_height + GRID_GAP;
                size.width = grid::width_for_columns(3);
            }
            2 => {
                x = grid::column_position(3);
                y += chat_height + GRID_GAP;
                size.width = grid::width_for_columns(6);
            }
            3 => {
                x = grid::column_position(9);
                y += chat_height + GRID_GAP;
                size.width = grid::width_for_columns(3);
            }
            4 => {
                y += chat_height + media_height + GRID_GAP * 2.0;
            }
            5 => {
                x = grid::column_position(9);
                y += chat_height + clock_height + GRID_GAP * 2.0;
                size.width = grid::width_for_columns(3);
            }
            _ => return Placement::fallback(widget),
        }
        Placement::new(x, y, size)
    }
}

/// Balanced arrangement: two wide rows with a trio along the bottom
pub struct BalancedRecipe;

impl ArrangementRecipe for BalancedRecipe {
    fn name(&self) -> &'static str {
        "balanced"
    }

    fn place(&self, widget: &Widget, slot: usize) -> Placement {
        let mut size = grid::default_size(widget.widget_type);
        let chat_height = grid::default_size(WidgetType::Chat).height;
        let media_height = grid::default_size(WidgetType::Media).height;
        let bottom_row = chat_height + media_height + GRID_GAP * 2.0;
        let mut x = grid::column_position(0);
        let mut y = CONTAINER_PADDING;
        match slot {
            0 => {
                size = Size::new(grid::width_for_columns(6), 280.0);
            }
            1 => {
                x = grid::column_position(6);
                size.width = grid::width_for_columns(6);
            }
            2 => {
                y += chat_height + GRID_GAP;
                size.width = grid::width_for_columns(6);
            }
            3 => {
                y += bottom_row;
                size.width = grid::width_for_columns(4);
            }
            4 => {
                x = grid::column_position(4);
                y += bottom_row;
            }
            5 => {
                x = grid::column_position(8);
                y += bottom_row;
                size.width = grid::width_for_columns(4);
            }
            _ => return Placement::fallback(widget),
        }
        Placement::new(x, y, size)
    }
}

/// Focus arrangement: one hero panel with the rest in a compact row below
pub struct FocusRecipe;

impl ArrangementRecipe for FocusRecipe {
    fn name(&self) -> &'static str {
        "focus"
    }

    fn place(&self, _widget: &Widget, slot: usize) -> Placement {
        if slot == 0 {
            return Placement::new(
                grid::column_position(1),
                CONTAINER_PADDING,
                Size::new(grid::width_for_columns(10), 300.0),
            );
        }
        // small panels, two columns apart, in a single row under the hero
        let column = 1 + (slot as u32 - 1) * 2;
        Placement::new(
            grid::column_position(column),
            CONTAINER_PADDING + 320.0,
            Size::new(grid::width_for_columns(2), 160.0),
        )
    }
}

/// Dashboard arrangement: chat centered, side panels down both edges
pub struct DashboardRecipe;

impl ArrangementRecipe for DashboardRecipe {
    fn name(&self) -> &'static str {
        "dashboard"
    }

    fn place(&self, widget: &Widget, slot: usize) -> Placement {
        let mut size = grid::default_size(widget.widget_type);
        let media_height = grid::default_size(WidgetType::Media).height;
        let clock_height = grid::default_size(WidgetType::Clock).height;
        let radio_height = grid::default_size(WidgetType::Radio).height;
        let mut x = grid::column_position(0);
        let mut y = CONTAINER_PADDING;
        match slot {
            0 => {
                x = grid::column_position(3);
                size = Size::new(grid::width_for_columns(6), 280.0);
            }
            1 => {
                size.width = grid::width_for_columns(3);
            }
            2 => {
                y += media_height + GRID_GAP;
                size.width = grid::width_for_columns(3);
            }
            3 => {
                x = grid::column_position(9);
                size.width = grid::width_for_columns(3);
            }
            4 => {
                x = grid::column_position(9);
                y += clock_height + GRID_GAP;
            }
            5 => {
                x = grid::column_position(9);
                y += radio_height + GRID_GAP * 2.0;
                size.width = grid::width_for_columns(3);
            }
            _ => return Placement::fallback(widget),
        }
        Placement::new(x, y, size)
    }
}

/// An ordered, non-empty rotation of arrangement recipes
pub struct RecipeSet {
    recipes: Vec<Box<dyn ArrangementRecipe>>,
}

impl std::fmt::Debug for RecipeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeSet")
            .field(
                "recipes",
                &self.recipes.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl RecipeSet {
    /// The built-in rotation used by the dashboard
    pub fn builtin() -> Self {
        Self {
            recipes: vec![
                Box::new(StandardRecipe),
                Box::new(ThreeColumnRecipe),
                Box::new(BalancedRecipe),
                Box::new(FocusRecipe),
                Box::new(DashboardRecipe),
            ],
        }
    }

    /// Build a custom rotation; fails on an empty recipe list
    pub fn with_recipes(recipes: Vec<Box<dyn ArrangementRecipe>>) -> Result<Self> {
        if recipes.is_empty() {
            return Err(LayoutEngineError::EmptyRecipeSet);
        }
        Ok(Self { recipes })
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipe at the given rotation index (wrapping)
    pub fn recipe(&self, index: usize) -> &dyn ArrangementRecipe {
        self.recipes[index % self.recipes.len()].as_ref()
    }

    /// Advance the rotation and re-place every widget through the next
    /// recipe by its position in the input sequence.
    ///
    /// Returns the new rotation index and the re-placed widget list. Only
    /// position and size are rewritten; identity, type, and payload pass
    /// through untouched.
    pub fn advance(&self, current: usize, widgets: &[Widget]) -> (usize, Vec<Widget>) {
        let next = (current + 1) % self.recipes.len();
        let recipe = self.recipes[next].as_ref();
        let arranged = widgets
            .iter()
            .enumerate()
            .map(|(slot, widget)| {
                let placement = recipe.place(widget, slot);
                widget
                    .clone()
                    .with_position(placement.position)
                    .with_size(placement.size)
            })
            .collect();
        (next, arranged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widget_model::WidgetType;

    fn roster() -> Vec<Widget> {
        vec![
            Widget::new(WidgetType::Chat),
            Widget::new(WidgetType::Media),
            Widget::new(WidgetType::Media),
            Widget::new(WidgetType::Clock),
            Widget::new(WidgetType::Radio),
            Widget::new(WidgetType::Tasks),
        ]
    }

    #[test]
    fn test_builtin_rotation_length() {
        assert_eq!(RecipeSet::builtin().len(), 5);
    }

    #[test]
    fn test_advance_cycles_back_to_start() {
        let recipes = RecipeSet::builtin();
        let widgets = roster();
        let mut index = 0;
        for _ in 0..recipes.len() {
            let (next, _) = recipes.advance(index, &widgets);
            index = next;
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn test_advance_is_deterministic() {
        let recipes = RecipeSet::builtin();
        let widgets = roster();
        let (_, a) = recipes.advance(2, &widgets);
        let (_, b) = recipes.advance(2, &widgets);
        assert_eq!(a, b);
    }

    #[test]
    fn test_advance_preserves_identity_type_and_payload() {
        let recipes = RecipeSet::builtin();
        let widgets = roster();
        let (_, arranged) = recipes.advance(0, &widgets);

        assert_eq!(arranged.len(), widgets.len());
        for (before, after) in widgets.iter().zip(&arranged) {
            assert_eq!(after.id, before.id);
            assert_eq!(after.widget_type, before.widget_type);
            assert_eq!(after.payload, before.payload);
            assert!(after.position.is_some());
            assert!(after.size.is_some());
        }
    }

    #[test]
    fn test_advance_repositions_by_slot_not_type() {
        // two widgets at recipe 0: one advance applies the three-column
        // recipe's slot rules regardless of widget type
        let recipes = RecipeSet::builtin();
        let widgets = vec![
            Widget::new(WidgetType::Chat),
            Widget::new(WidgetType::Tasks),
        ];
        let (next, arranged) = recipes.advance(0, &widgets);
        assert_eq!(next, 1);

        // slot 0: centered hero spot
        assert_eq!(
            arranged[0].position.unwrap(),
            Position::new(grid::column_position(3), CONTAINER_PADDING)
        );
        assert_eq!(
            arranged[0].size.unwrap(),
            Size::new(grid::width_for_columns(6), 280.0)
        );

        // slot 1: left column under the chat row, narrowed to three columns
        assert_eq!(
            arranged[1].position.unwrap(),
            Position::new(
                grid::column_position(0),
                CONTAINER_PADDING + grid::default_size(WidgetType::Chat).height + GRID_GAP
            )
        );
        assert_eq!(
            arranged[1].size.unwrap().width,
            grid::width_for_columns(3)
        );
        assert_eq!(arranged[1].widget_type, WidgetType::Tasks);
    }

    #[test]
    fn test_oversized_roster_falls_back_without_panicking() {
        let recipes = RecipeSet::builtin();
        // nine widgets exceed the six-slot design of every recipe
        let widgets: Vec<Widget> = (0..9).map(|_| Widget::new(WidgetType::Clock)).collect();
        for start in 0..recipes.len() {
            let (_, arranged) = recipes.advance(start, &widgets);
            assert_eq!(arranged.len(), 9);
            for widget in &arranged {
                assert!(widget.position.is_some());
                assert!(widget.size.is_some());
            }
        }
    }

    #[test]
    fn test_overflow_slots_use_type_defaults() {
        let widgets: Vec<Widget> = (0..8).map(|_| Widget::new(WidgetType::Clock)).collect();
        let placement = StandardRecipe.place(&widgets[7], 7);
        assert_eq!(placement.position, grid::default_position());
        assert_eq!(placement.size, grid::default_size(WidgetType::Clock));
    }

    #[test]
    fn test_focus_recipe_rows_small_panels() {
        let widget = Widget::new(WidgetType::Clock);
        let hero = FocusRecipe.place(&widget, 0);
        assert_eq!(hero.size, Size::new(grid::width_for_columns(10), 300.0));

        for slot in 1..6 {
            let placement = FocusRecipe.place(&widget, slot);
            assert_eq!(placement.position.y, CONTAINER_PADDING + 320.0);
            assert_eq!(
                placement.position.x,
                grid::column_position(1 + (slot as u32 - 1) * 2)
            );
            assert_eq!(placement.size, Size::new(grid::width_for_columns(2), 160.0));
        }
    }

    #[test]
    fn test_empty_recipe_set_is_rejected() {
        let err = RecipeSet::with_recipes(Vec::new()).unwrap_err();
        assert!(matches!(err, LayoutEngineError::EmptyRecipeSet));
    }

    #[test]
    fn test_custom_recipe_set() {
        let recipes =
            RecipeSet::with_recipes(vec![Box::new(StandardRecipe), Box::new(FocusRecipe)])
                .unwrap();
        assert_eq!(recipes.len(), 2);
        let (next, _) = recipes.advance(1, &roster());
        assert_eq!(next, 0);
    }
}
