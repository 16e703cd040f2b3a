use scrumboard_domain::{
    view, BoardList, Card, CardOrdering, CompositeFilter, CurrentUser, ListId, PanelVisibility,
    UserData,
};
use serde::Serialize;

/// Everything the board renders from. Only `BoardController` mutates it;
/// everyone else sees clones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardState {
    #[serde(skip)]
    pub current_user: CurrentUser,
    pub lists: Vec<BoardList>,
    /// Flattened card view; see `scrumboard_domain::view`
    pub cards: Vec<Card>,
    pub user_data: UserData,
    pub panels: PanelVisibility,
    pub ordering: CardOrdering,
    /// Bumped every time `lists` is replaced wholesale
    #[serde(skip)]
    lists_generation: u64,
}

impl BoardState {
    pub fn new(current_user: CurrentUser) -> Self {
        Self {
            current_user,
            lists: Vec::new(),
            cards: Vec::new(),
            user_data: UserData::new(),
            panels: PanelVisibility::new(),
            ordering: CardOrdering::default(),
            lists_generation: 0,
        }
    }

    pub(crate) fn replace_lists(&mut self, lists: Vec<BoardList>) {
        self.cards = view::flatten(&lists);
        self.lists = lists;
        self.lists_generation += 1;
    }

    pub(crate) fn lists_generation(&self) -> u64 {
        self.lists_generation
    }

    /// Append a created card to the flattened view, and to its list only
    /// while `lists` is still the generation the request was made against.
    /// Returns whether the list received the card.
    pub(crate) fn append_created_card(
        &mut self,
        list_id: ListId,
        card: Card,
        generation: u64,
    ) -> bool {
        if generation == self.lists_generation {
            view::append_card(&mut self.lists, &mut self.cards, list_id, card)
        } else {
            self.cards.push(card);
            false
        }
    }

    pub fn list(&self, index: usize) -> Option<&BoardList> {
        self.lists.get(index)
    }

    pub fn is_consistent(&self) -> bool {
        view::is_consistent(&self.lists, &self.cards)
    }

    pub fn orphaned_cards(&self) -> Vec<&Card> {
        view::orphans(&self.lists, &self.cards)
    }

    /// The flattened view narrowed by `filter` and put in display order
    pub fn visible_cards(&self, filter: &CompositeFilter) -> Vec<&Card> {
        self.ordering.sorted(filter.apply(&self.cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrumboard_domain::{SortField, TagFilter};

    #[test]
    fn test_new_state_is_empty() {
        let state = BoardState::new(CurrentUser::new(1));
        assert!(state.lists.is_empty());
        assert!(state.cards.is_empty());
        assert!(state.user_data.is_empty());
        assert!(state.panels.sidebar);
        assert_eq!(state.ordering.field, SortField::StoryPoints);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_replace_lists_rebuilds_view() {
        let mut state = BoardState::new(CurrentUser::new(1));
        state.cards = vec![Card::new(99, 9, "stale")];

        state.replace_lists(vec![
            BoardList::new(1, "Todo").with_cards(vec![Card::new(10, 1, "A")]),
            BoardList::new(2, "Done").with_cards(vec![Card::new(20, 2, "B")]),
        ]);

        let ids: Vec<_> = state.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![10, 20]);
        assert!(state.orphaned_cards().is_empty());
    }

    #[test]
    fn test_created_card_skips_replaced_lists() {
        let mut state = BoardState::new(CurrentUser::new(1));
        state.replace_lists(vec![BoardList::new(1, "Todo")]);
        let before_reload = state.lists_generation();

        state.replace_lists(vec![
            BoardList::new(1, "Todo").with_cards(vec![Card::new(11, 1, "B")])
        ]);
        assert!(!state.append_created_card(1, Card::new(11, 1, "B"), before_reload));
        assert_eq!(state.lists[0].cards.len(), 1);
        assert_eq!(state.cards.len(), 2);

        let current = state.lists_generation();
        assert!(state.append_created_card(1, Card::new(12, 1, "C"), current));
        assert_eq!(state.lists[0].cards.len(), 2);
        assert_eq!(state.cards.len(), 3);
    }

    #[test]
    fn test_visible_cards_filters_then_sorts() {
        let mut state = BoardState::new(CurrentUser::new(1));
        state.replace_lists(vec![BoardList::new(1, "Todo").with_cards(vec![
            Card::new(10, 1, "A").with_story_points(1).with_tag("#C6F6D5"),
            Card::new(11, 1, "B").with_story_points(5).with_tag("#C6F6D5"),
            Card::new(12, 1, "C").with_story_points(8),
        ])]);

        let filter = CompositeFilter::new().with_filter(Box::new(TagFilter::new("#C6F6D5")));
        let ids: Vec<_> = state.visible_cards(&filter).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![11, 10]);
    }
}
