//! Widget types, payloads, and the widget record itself

use crate::{Position, Result, Size, WidgetId, WidgetModelError};
use serde::{Deserialize, Serialize};

/// The fixed roster of widget types supported by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    Chat,
    Tasks,
    Media,
    Clock,
    Radio,
}

impl WidgetType {
    /// Every supported widget type
    pub const ALL: [WidgetType; 5] = [
        WidgetType::Chat,
        WidgetType::Tasks,
        WidgetType::Media,
        WidgetType::Clock,
        WidgetType::Radio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetType::Chat => "chat",
            WidgetType::Tasks => "tasks",
            WidgetType::Media => "media",
            WidgetType::Clock => "clock",
            WidgetType::Radio => "radio",
        }
    }
}

impl std::str::FromStr for WidgetType {
    type Err = WidgetModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "chat" => Ok(WidgetType::Chat),
            "tasks" => Ok(WidgetType::Tasks),
            "media" => Ok(WidgetType::Media),
            "clock" => Ok(WidgetType::Clock),
            "radio" => Ok(WidgetType::Radio),
            other => Err(WidgetModelError::UnknownWidgetType(other.to_string())),
        }
    }
}

impl std::fmt::Display for WidgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Type-specific widget data, keyed by the widget's type.
///
/// Each variant's schema is explicit; only media widgets carry data today,
/// the remaining variants reserve their slot in the union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WidgetPayload {
    Chat,
    Tasks,
    Media { default_images: Vec<String> },
    Clock,
    Radio,
}

impl WidgetPayload {
    /// The empty payload for the given widget type
    pub fn default_for(widget_type: WidgetType) -> Self {
        match widget_type {
            WidgetType::Chat => WidgetPayload::Chat,
            WidgetType::Tasks => WidgetPayload::Tasks,
            WidgetType::Media => WidgetPayload::Media {
                default_images: Vec::new(),
            },
            WidgetType::Clock => WidgetPayload::Clock,
            WidgetType::Radio => WidgetPayload::Radio,
        }
    }

    /// The widget type this payload belongs to
    pub fn widget_type(&self) -> WidgetType {
        match self {
            WidgetPayload::Chat => WidgetType::Chat,
            WidgetPayload::Tasks => WidgetType::Tasks,
            WidgetPayload::Media { .. } => WidgetType::Media,
            WidgetPayload::Clock => WidgetType::Clock,
            WidgetPayload::Radio => WidgetType::Radio,
        }
    }
}

/// A single dashboard panel with geometry and type-specific payload.
///
/// Position and size are optional; when absent, the type-specific defaults
/// from the grid module apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,
    pub widget_type: WidgetType,
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub payload: WidgetPayload,
}

impl Widget {
    /// Create a widget of the given type with a fresh id and empty payload
    pub fn new(widget_type: WidgetType) -> Self {
        Self {
            id: WidgetId::generate(),
            widget_type,
            position: None,
            size: None,
            payload: WidgetPayload::default_for(widget_type),
        }
    }

    pub fn with_id(mut self, id: WidgetId) -> Self {
        self.id = id;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the image rotation of a media widget; no-op for other types
    pub fn with_default_images(mut self, images: Vec<String>) -> Self {
        if let WidgetPayload::Media { default_images } = &mut self.payload {
            *default_images = images;
        }
        self
    }

    /// Clone this widget under a freshly generated id
    pub fn with_fresh_id(&self) -> Self {
        let mut clone = self.clone();
        clone.id = WidgetId::generate();
        clone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_widget_type_roundtrip() {
        for widget_type in WidgetType::ALL {
            let parsed = WidgetType::from_str(widget_type.as_str()).unwrap();
            assert_eq!(parsed, widget_type);
        }
    }

    #[test]
    fn test_widget_type_unknown() {
        let err = WidgetType::from_str("weather").unwrap_err();
        assert!(matches!(err, WidgetModelError::UnknownWidgetType(name) if name == "weather"));
    }

    #[test]
    fn test_payload_matches_type() {
        for widget_type in WidgetType::ALL {
            let payload = WidgetPayload::default_for(widget_type);
            assert_eq!(payload.widget_type(), widget_type);
        }
    }

    #[test]
    fn test_new_widget_has_matching_payload() {
        let widget = Widget::new(WidgetType::Media);
        assert_eq!(widget.payload.widget_type(), WidgetType::Media);
        assert!(widget.position.is_none());
        assert!(widget.size.is_none());
    }

    #[test]
    fn test_default_images_only_apply_to_media() {
        let media = Widget::new(WidgetType::Media)
            .with_default_images(vec!["https://example.com/a.png".to_string()]);
        assert_eq!(
            media.payload,
            WidgetPayload::Media {
                default_images: vec!["https://example.com/a.png".to_string()]
            }
        );

        let clock =
            Widget::new(WidgetType::Clock).with_default_images(vec!["ignored".to_string()]);
        assert_eq!(clock.payload, WidgetPayload::Clock);
    }

    #[test]
    fn test_fresh_id_preserves_everything_else() {
        let widget = Widget::new(WidgetType::Tasks)
            .with_position(Position::new(10.0, 20.0))
            .with_size(Size::new(300.0, 200.0));
        let copy = widget.with_fresh_id();

        assert_ne!(copy.id, widget.id);
        assert_eq!(copy.widget_type, widget.widget_type);
        assert_eq!(copy.position, widget.position);
        assert_eq!(copy.size, widget.size);
        assert_eq!(copy.payload, widget.payload);
    }

    #[test]
    fn test_widget_type_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&WidgetType::Chat).unwrap(),
            "\"chat\""
        );
        let parsed: WidgetType = serde_json::from_str("\"radio\"").unwrap();
        assert_eq!(parsed, WidgetType::Radio);
    }
}
