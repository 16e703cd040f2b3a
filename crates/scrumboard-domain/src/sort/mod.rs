//! Card display ordering.
//!
//! The board renders cards by story points, highest first, unless the user
//! picks another field. Sorting is stable and only ever applied to a
//! borrowed copy of the card view.

use crate::Card;
use serde::Serialize;
use std::borrow::Borrow;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    StoryPoints,
    BusinessValue,
    Created,
    Updated,
    Title,
}

impl SortField {
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        match self {
            Self::StoryPoints => a.story_points.cmp(&b.story_points),
            Self::BusinessValue => a.business_value.cmp(&b.business_value),
            Self::Created => a.created.cmp(&b.created),
            Self::Updated => a.updated.cmp(&b.updated),
            Self::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }

    fn is_missing(&self, card: &Card) -> bool {
        match self {
            Self::StoryPoints => card.story_points.is_none(),
            Self::BusinessValue => card.business_value.is_none(),
            Self::Created => card.created.is_none(),
            Self::Updated => card.updated.is_none(),
            Self::Title => false,
        }
    }
}

/// Field plus direction. Cards without a value for the field sort last in
/// either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardOrdering {
    pub field: SortField,
    pub reverse: bool,
}

impl Default for CardOrdering {
    fn default() -> Self {
        Self {
            field: SortField::StoryPoints,
            reverse: true,
        }
    }
}

impl CardOrdering {
    pub fn new(field: SortField, reverse: bool) -> Self {
        Self { field, reverse }
    }

    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        match (self.field.is_missing(a), self.field.is_missing(b)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let cmp = self.field.compare(a, b);
                if self.reverse {
                    cmp.reverse()
                } else {
                    cmp
                }
            }
        }
    }

    /// Sort a slice in place. Works with both `&Card` and `Card` elements.
    pub fn sort_by<T: Borrow<Card>>(&self, cards: &mut [T]) {
        cards.sort_by(|a, b| self.compare(a.borrow(), b.borrow()));
    }

    pub fn sorted<'a>(&self, cards: impl IntoIterator<Item = &'a Card>) -> Vec<&'a Card> {
        let mut sorted: Vec<&Card> = cards.into_iter().collect();
        self.sort_by(&mut sorted);
        sorted
    }
}
