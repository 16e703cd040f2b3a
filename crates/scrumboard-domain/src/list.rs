use serde::{Deserialize, Serialize};

use crate::card::Card;

pub type ListId = i64;

/// A named list of cards. The server owns the id and the nested card order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl BoardList {
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: Vec::new(),
        }
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

/// Request body for creating a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewList {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_without_cards_field() {
        let list: BoardList = serde_json::from_value(json!({"id": 3, "name": "Done"})).unwrap();
        assert_eq!(list, BoardList::new(3, "Done"));
        assert_eq!(list.card_count(), 0);
    }

    #[test]
    fn test_list_with_nested_cards() {
        let list: BoardList = serde_json::from_value(json!({
            "id": 1,
            "name": "Todo",
            "cards": [
                {"id": 10, "list": 1, "title": "A"},
                {"id": 11, "list": 1, "title": "B"}
            ]
        }))
        .unwrap();

        assert_eq!(list.card_count(), 2);
        assert_eq!(list.cards[0].title, "A");
        assert_eq!(list.cards[1].title, "B");
    }
}
