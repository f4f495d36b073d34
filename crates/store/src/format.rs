//! Persisted layout wire format
//!
//! These records match the external JSON contract for stored layouts:
//! `{id, name, description?, widgets: [{id, type, position: {x, y},
//! size: {width, height}, defaultImages?}], createdAt: epoch-ms}`.
//! The in-memory model keeps widget payloads as a tagged union; the wire
//! shape flattens the media images onto the widget record, so conversion
//! happens here rather than through serde derives on the model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use widget_model::{Layout, LayoutId, Position, Size, Widget, WidgetId, WidgetPayload, WidgetType};

/// Wire form of a single widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredWidget {
    pub id: WidgetId,
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(rename = "defaultImages", skip_serializing_if = "Option::is_none")]
    pub default_images: Option<Vec<String>>,
}

/// Wire form of a stored layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLayout {
    pub id: LayoutId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub widgets: Vec<StoredWidget>,
    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl From<&Widget> for StoredWidget {
    fn from(widget: &Widget) -> Self {
        let default_images = match &widget.payload {
            WidgetPayload::Media { default_images } if !default_images.is_empty() => {
                Some(default_images.clone())
            }
            _ => None,
        };
        Self {
            id: widget.id.clone(),
            widget_type: widget.widget_type,
            position: widget.position,
            size: widget.size,
            default_images,
        }
    }
}

impl From<StoredWidget> for Widget {
    fn from(stored: StoredWidget) -> Self {
        let payload = match stored.widget_type {
            WidgetType::Media => WidgetPayload::Media {
                default_images: stored.default_images.unwrap_or_default(),
            },
            other => WidgetPayload::default_for(other),
        };
        Self {
            id: stored.id,
            widget_type: stored.widget_type,
            position: stored.position,
            size: stored.size,
            payload,
        }
    }
}

impl From<&Layout> for StoredLayout {
    fn from(layout: &Layout) -> Self {
        Self {
            id: layout.id.clone(),
            name: layout.name.clone(),
            description: layout.description.clone(),
            widgets: layout.widgets.iter().map(StoredWidget::from).collect(),
            created_at: layout.created_at,
        }
    }
}

impl From<StoredLayout> for Layout {
    fn from(stored: StoredLayout) -> Self {
        Self {
            id: stored.id,
            name: stored.name,
            description: stored.description,
            widgets: stored.widgets.into_iter().map(Widget::from).collect(),
            created_at: stored.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_wire_shape() {
        let widget = Widget::new(WidgetType::Media)
            .with_id("default-media-1".into())
            .with_position(Position::new(240.0, 460.0))
            .with_size(Size::new(360.0, 280.0))
            .with_default_images(vec!["https://example.com/a.png".to_string()]);

        let json = serde_json::to_value(StoredWidget::from(&widget)).unwrap();
        assert_eq!(json["id"], "default-media-1");
        assert_eq!(json["type"], "media");
        assert_eq!(json["position"]["x"], 240.0);
        assert_eq!(json["size"]["height"], 280.0);
        assert_eq!(json["defaultImages"][0], "https://example.com/a.png");
    }

    #[test]
    fn test_non_media_widgets_omit_default_images() {
        let widget = Widget::new(WidgetType::Clock);
        let json = serde_json::to_value(StoredWidget::from(&widget)).unwrap();
        assert!(json.get("defaultImages").is_none());
        assert!(json.get("position").is_none());
    }

    #[test]
    fn test_layout_created_at_is_epoch_millis() {
        let layout = Layout {
            id: LayoutId::from_raw("l1"),
            name: "test".to_string(),
            description: None,
            widgets: Vec::new(),
            created_at: DateTime::from_timestamp_millis(1_733_940_000_000).unwrap(),
        };
        let json = serde_json::to_value(StoredLayout::from(&layout)).unwrap();
        assert_eq!(json["createdAt"], 1_733_940_000_000_i64);
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_layout_roundtrip_through_wire_format() {
        let layout = Layout::snapshot(
            "Evening",
            Some("Layout saved on 2026-08-07".to_string()),
            &[
                Widget::new(WidgetType::Chat).with_position(Position::new(40.0, 40.0)),
                Widget::new(WidgetType::Media)
                    .with_default_images(vec!["https://example.com/b.png".to_string()]),
            ],
        );

        let stored = StoredLayout::from(&layout);
        let raw = serde_json::to_string(&stored).unwrap();
        let parsed: StoredLayout = serde_json::from_str(&raw).unwrap();
        let restored = Layout::from(parsed);

        assert_eq!(restored.id, layout.id);
        assert_eq!(restored.name, layout.name);
        assert_eq!(restored.widgets, layout.widgets);
        // epoch-ms truncates sub-millisecond precision
        assert_eq!(
            restored.created_at.timestamp_millis(),
            layout.created_at.timestamp_millis()
        );
    }

    #[test]
    fn test_unknown_widget_type_fails_to_parse() {
        let raw = r#"{"id": "w1", "type": "weather"}"#;
        assert!(serde_json::from_str::<StoredWidget>(raw).is_err());
    }
}
