use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::list::ListId;

pub type CardId = i64;

/// Colour assigned to cards the server created without an explicit tag
pub const DEFAULT_TAG_COLOR: &str = "#BEE3F8";

fn default_tag() -> String {
    DEFAULT_TAG_COLOR.to_string()
}

/// A card as returned by the board service.
///
/// Only `id`, `list` and `title` are guaranteed; the remaining fields default
/// when the server omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub list: ListId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub extra: Option<String>,
    #[serde(default)]
    pub story_points: Option<i32>,
    #[serde(default)]
    pub business_value: Option<i32>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default = "default_tag")]
    pub tag: String,
}

impl Card {
    pub fn new(id: CardId, list: ListId, title: impl Into<String>) -> Self {
        Self {
            id,
            list,
            title: title.into(),
            description: String::new(),
            extra: None,
            story_points: None,
            business_value: None,
            created: None,
            updated: None,
            tag: default_tag(),
        }
    }

    pub fn with_story_points(mut self, points: i32) -> Self {
        self.story_points = Some(points);
        self
    }

    pub fn with_tag(mut self, color: impl Into<String>) -> Self {
        self.tag = color.into();
        self
    }

    pub fn belongs_to(&self, list_id: ListId) -> bool {
        self.list == list_id
    }
}

/// Request body for creating a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCard {
    pub list: ListId,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_payload_defaults() {
        let card: Card = serde_json::from_value(json!({
            "id": 10,
            "list": 1,
            "title": "A"
        }))
        .unwrap();

        assert_eq!(card, Card::new(10, 1, "A"));
        assert_eq!(card.tag, DEFAULT_TAG_COLOR);
        assert!(card.story_points.is_none());
    }

    #[test]
    fn test_full_payload() {
        let card: Card = serde_json::from_value(json!({
            "id": 11,
            "list": 2,
            "title": "Write docs",
            "description": "user guide",
            "extra": null,
            "story_points": 5,
            "business_value": 8,
            "created": "2017-03-04T10:00:00Z",
            "updated": null,
            "tag": "#FED7D7"
        }))
        .unwrap();

        assert_eq!(card.story_points, Some(5));
        assert_eq!(card.business_value, Some(8));
        assert_eq!(card.tag, "#FED7D7");
        assert!(card.created.is_some());
        assert!(card.belongs_to(2));
        assert!(!card.belongs_to(1));
    }

    #[test]
    fn test_new_card_body() {
        let body = serde_json::to_value(NewCard {
            list: 1,
            title: "B".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({"list": 1, "title": "B"}));
    }
}
