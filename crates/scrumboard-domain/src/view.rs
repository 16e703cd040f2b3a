//! Flattened card view.
//!
//! The board keeps every card twice: once inside its owning list and once in
//! a flat collection used for cross-list rendering. The flat collection is
//! only synchronised at two points, a full rebuild after the board is loaded
//! and a single append after a card is created. Nothing here recomputes it
//! reactively, so removing a list leaves its cards behind in the flat view
//! (orphans) until the next full rebuild.

use std::collections::{HashMap, HashSet};

use crate::{BoardList, Card, CardId, ListId};

/// Rebuild the flat view: lists in order, cards in order within each list
pub fn flatten(lists: &[BoardList]) -> Vec<Card> {
    lists
        .iter()
        .flat_map(|list| list.cards.iter().cloned())
        .collect()
}

/// Append a newly created card to its owning list and then to the flat view.
///
/// The list is located by id. Returns `false` when no list with that id is
/// present any more, in which case only the flat view receives the card.
pub fn append_card(
    lists: &mut [BoardList],
    cards: &mut Vec<Card>,
    list_id: ListId,
    card: Card,
) -> bool {
    let attached = match lists.iter_mut().find(|list| list.id == list_id) {
        Some(list) => {
            list.cards.push(card.clone());
            true
        }
        None => false,
    };
    cards.push(card);
    attached
}

/// Total number of cards held by the lists themselves
pub fn list_card_total(lists: &[BoardList]) -> usize {
    lists.iter().map(BoardList::card_count).sum()
}

/// True when the flat view holds exactly the lists' cards, counting
/// duplicates, regardless of order
pub fn is_consistent(lists: &[BoardList], cards: &[Card]) -> bool {
    if cards.len() != list_card_total(lists) {
        return false;
    }
    let mut counts: HashMap<CardId, isize> = HashMap::new();
    for card in lists.iter().flat_map(|list| list.cards.iter()) {
        *counts.entry(card.id).or_default() += 1;
    }
    for card in cards {
        *counts.entry(card.id).or_default() -= 1;
    }
    counts.values().all(|count| *count == 0)
}

/// Cards in the flat view whose owning list is no longer on the board
pub fn orphans<'a>(lists: &[BoardList], cards: &'a [Card]) -> Vec<&'a Card> {
    let present: HashSet<ListId> = lists.iter().map(|list| list.id).collect();
    cards
        .iter()
        .filter(|card| !present.contains(&card.list))
        .collect()
}
