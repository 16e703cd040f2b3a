//! Card filter implementations.

use crate::{Card, ListId};

/// Trait for filtering cards by various criteria.
pub trait CardFilter {
    /// Returns true if the card matches the filter criteria.
    fn matches(&self, card: &Card) -> bool;
}

/// Filter cards by tag colour (case-insensitive).
pub struct TagFilter {
    color: String,
}

impl TagFilter {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl CardFilter for TagFilter {
    fn matches(&self, card: &Card) -> bool {
        card.tag.eq_ignore_ascii_case(&self.color)
    }
}

/// Filter cards whose title or description contains a query, ignoring case.
pub struct TitleFilter {
    needle: String,
}

impl TitleFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }
}

impl CardFilter for TitleFilter {
    fn matches(&self, card: &Card) -> bool {
        card.title.to_lowercase().contains(&self.needle)
            || card.description.to_lowercase().contains(&self.needle)
    }
}

/// Filter cards by owning list.
pub struct ListFilter {
    list_id: ListId,
}

impl ListFilter {
    pub fn new(list_id: ListId) -> Self {
        Self { list_id }
    }
}

impl CardFilter for ListFilter {
    fn matches(&self, card: &Card) -> bool {
        card.belongs_to(self.list_id)
    }
}

/// Combine multiple filters with AND logic.
///
/// A card matches only if it passes all filters.
pub struct CompositeFilter {
    filters: Vec<Box<dyn CardFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all cards).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn CardFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Cards passing every filter, in their original order
    pub fn apply<'a>(&self, cards: &'a [Card]) -> Vec<&'a Card> {
        cards.iter().filter(|card| self.matches(card)).collect()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFilter for CompositeFilter {
    fn matches(&self, card: &Card) -> bool {
        self.filters.iter().all(|f| f.matches(card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Card> {
        vec![
            Card::new(1, 1, "Fix login").with_tag("#FED7D7"),
            Card::new(2, 1, "Write docs"),
            Card::new(3, 2, "Fix layout").with_tag("#fed7d7"),
        ]
    }

    #[test]
    fn test_tag_filter() {
        let filter = TagFilter::new("#FED7D7");
        let ids: Vec<_> = cards().iter().filter(|c| filter.matches(c)).map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_title_filter() {
        let mut card = Card::new(4, 1, "Release");
        card.description = "needs a FIX first".to_string();

        let filter = TitleFilter::new("fix");
        assert!(filter.matches(&cards()[0]));
        assert!(!filter.matches(&cards()[1]));
        assert!(filter.matches(&card));
    }

    #[test]
    fn test_list_filter() {
        let filter = ListFilter::new(2);
        assert!(!filter.matches(&cards()[0]));
        assert!(filter.matches(&cards()[2]));
    }

    #[test]
    fn test_composite_filter() {
        let cards = cards();

        let empty = CompositeFilter::new();
        assert!(empty.is_empty());
        assert_eq!(empty.apply(&cards).len(), 3);

        let composite = CompositeFilter::new()
            .with_filter(Box::new(TitleFilter::new("fix")))
            .with_filter(Box::new(ListFilter::new(1)));
        let matched = composite.apply(&cards);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }
}
