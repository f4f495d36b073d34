//! Layout persistence adapter
//!
//! Lists, saves, deletes, and applies named layouts over a pluggable
//! backend. The built-in default layout is synthesized here on every call;
//! it is never written to storage and can never be deleted. Re-applying the
//! default after deleting the currently applied layout is left to the
//! caller, keeping this component free of side effects beyond the backend.

use crate::backend::PersistenceBackend;
use crate::format::StoredLayout;
use crate::{Result, StoreError};
use chrono::{DateTime, Utc};
use layout_engine::GRID_SIZE;
use widget_model::{Layout, LayoutId, Position, Size, Widget, WidgetId, WidgetType};

/// Image rotation shown by the first built-in media widget
const BUILTIN_MEDIA_IMAGES_ONE: [&str; 2] = [
    "https://res.cloudinary.com/dpfbkeapy/image/upload/v1733940233/maza2019_surrealistic_linocut_black__white_art_of_a_guyanese_bl_5b4f758b-b775-40d0-979e-7a75b5482ae9_foh91l.png",
    "https://res.cloudinary.com/dpfbkeapy/image/upload/v1733940237/joekr_engineer_armor_--v_6.1_e3b1abe8-412f-4fd4-96f1-1018efb9877f_b2mbnz.png",
];

/// Image rotation shown by the second built-in media widget
const BUILTIN_MEDIA_IMAGES_TWO: [&str; 2] = [
    "https://res.cloudinary.com/dpfbkeapy/image/upload/v1733947883/creatorstuart_Red_balloons_float_on_a_misty_street_in_1920s_Der_d5c5aeac-c3f4-4335-a199-f60beb9e6064_b7q3di.png",
    "https://res.cloudinary.com/dpfbkeapy/image/upload/v1733947880/s3chek_92897_real_image_of_wooden_bench_in_nature_on_top_of_a_h_cf577a48-3c31-4ee5-85fa-4ea849a8bc24_fvirjt.png",
];

fn grid(units: f64) -> f64 {
    units * GRID_SIZE
}

/// Build the immutable built-in layout.
///
/// Regenerated on every call rather than loaded from storage; `created_at`
/// is the epoch so every user layout sorts after it by creation time.
pub fn default_layout() -> Layout {
    Layout {
        id: LayoutId::default_layout(),
        name: "Default".to_string(),
        description: None,
        widgets: vec![
            Widget::new(WidgetType::Chat)
                .with_id(WidgetId::from_raw("default-chat"))
                .with_position(Position::new(grid(24.0), grid(12.0)))
                .with_size(Size::new(grid(40.0), grid(32.0))),
            Widget::new(WidgetType::Tasks)
                .with_id(WidgetId::from_raw("default-tasks"))
                .with_position(Position::new(grid(66.0), grid(12.0)))
                .with_size(Size::new(grid(32.0), grid(32.0))),
            Widget::new(WidgetType::Media)
                .with_id(WidgetId::from_raw("default-media-1"))
                .with_position(Position::new(grid(24.0), grid(46.0)))
                .with_size(Size::new(grid(36.0), grid(28.0)))
                .with_default_images(
                    BUILTIN_MEDIA_IMAGES_ONE.iter().map(|s| s.to_string()).collect(),
                ),
            Widget::new(WidgetType::Media)
                .with_id(WidgetId::from_raw("default-media-2"))
                .with_position(Position::new(grid(62.0), grid(46.0)))
                .with_size(Size::new(grid(36.0), grid(28.0)))
                .with_default_images(
                    BUILTIN_MEDIA_IMAGES_TWO.iter().map(|s| s.to_string()).collect(),
                ),
            Widget::new(WidgetType::Clock)
                .with_id(WidgetId::from_raw("default-clock"))
                .with_position(Position::new(grid(100.0), grid(12.0)))
                .with_size(Size::new(grid(24.0), grid(15.0))),
            Widget::new(WidgetType::Radio)
                .with_id(WidgetId::from_raw("default-radio"))
                .with_position(Position::new(grid(100.0), grid(29.0)))
                .with_size(Size::new(grid(24.0), grid(45.0))),
        ],
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Persistence adapter for named layouts
pub struct LayoutService {
    backend: Box<dyn PersistenceBackend>,
}

impl LayoutService {
    pub fn new(backend: Box<dyn PersistenceBackend>) -> Self {
        Self { backend }
    }

    /// All layouts: the synthesized default first, then stored layouts in
    /// backend order. A backend or parse failure degrades to the
    /// default-only list instead of failing the caller.
    pub fn list_layouts(&self) -> Vec<Layout> {
        let mut layouts = vec![default_layout()];
        match self.backend.list() {
            Ok(stored) => layouts.extend(stored.into_iter().map(Layout::from)),
            Err(e) => {
                tracing::warn!("Failed to load stored layouts: {}", e);
            }
        }
        layouts
    }

    /// Snapshot the given widgets as a new named layout and persist it.
    ///
    /// The snapshot is a deep copy: mutating the live widgets afterwards
    /// does not change the saved record. On write failure the error is
    /// surfaced and previously stored layouts are left as they were.
    pub fn save(&self, name: impl Into<String>, widgets: &[Widget]) -> Result<Layout> {
        let name = name.into();
        let layout = Layout::snapshot(
            &name,
            Some(format!("Layout saved on {}", Utc::now().format("%Y-%m-%d"))),
            widgets,
        );
        self.backend.create(&StoredLayout::from(&layout))?;
        tracing::debug!(layout = %layout.id, name = %name, "saved layout");
        Ok(layout)
    }

    /// Delete a stored layout by id.
    ///
    /// Deleting the protected default fails with `ProtectedLayout` and
    /// leaves storage untouched; deleting an unknown id is a no-op. If the
    /// deleted layout is currently applied, re-applying the default is the
    /// caller's responsibility.
    pub fn delete(&self, id: &LayoutId) -> Result<()> {
        if id.is_default() {
            return Err(StoreError::ProtectedLayout);
        }
        self.backend.delete(id)
    }

    /// Produce a fresh-id copy of a layout's widgets, ready for loading into
    /// the live store.
    ///
    /// The stored layout is not mutated. Regenerated ids are distinct from
    /// the source ids and from each other, even when the source carries
    /// duplicates; geometry and payload carry over unchanged. Positions are
    /// not re-validated against the current viewport.
    pub fn apply(&self, layout: &Layout) -> Vec<Widget> {
        let mut widgets: Vec<Widget> = Vec::with_capacity(layout.widgets.len());
        for source in &layout.widgets {
            let mut widget = source.with_fresh_id();
            while widgets.iter().any(|fresh| fresh.id == widget.id)
                || layout.widgets.iter().any(|stored| stored.id == widget.id)
            {
                widget.id = WidgetId::generate();
            }
            widgets.push(widget);
        }
        tracing::debug!(layout = %layout.id, widgets = widgets.len(), "applied layout");
        widgets
    }

    /// Serialized size of the stored collection in bytes. The settings
    /// surface reports this; no cap is enforced here.
    pub fn usage_bytes(&self) -> usize {
        match self.backend.list() {
            Ok(stored) => serde_json::to_string(&stored)
                .map(|raw| raw.len())
                .unwrap_or(0),
            Err(_) => 0,
        }
    }
}
