mod state;

pub use state::BoardState;

use futures::future::BoxFuture;
use parking_lot::Mutex;
use scrumboard_core::ScrumboardResult;
use scrumboard_domain::{
    BoardList, Card, CardOrdering, CurrentUser, FieldUpdate, NewCard, NewList, Panel,
    UserData, UserId,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::confirm::AsyncConfirmation;
use crate::debounce::Debouncer;
use crate::session::{SessionGuard, SessionStorage};
use crate::store::BoardStore;

/// External services the controller talks to
pub struct Collaborators {
    pub store: Arc<dyn BoardStore>,
    pub session: Arc<dyn SessionGuard>,
    pub storage: Arc<dyn SessionStorage>,
    pub confirmation: Arc<dyn AsyncConfirmation>,
}

/// Owns the board state and keeps it in step with the remote store.
///
/// # Update policy
///
/// Local state changes only after the store acknowledges a request; nothing
/// is applied optimistically. Failed requests are logged and otherwise leave
/// no trace: state stays as it was and the caller sees the same result as
/// for a no-op.
///
/// # Ordering
///
/// Requests carry no sequence number and may complete in any order. Each
/// response is applied when it arrives, so a slow `load_board` can replace
/// lists that a faster `create_list` already extended.
///
/// # Flattened view
///
/// `cards` is rebuilt in full after `load_board` and appended to after
/// `create_card`. Deleting a list leaves that list's cards in `cards`, and a
/// card created across a reload appears in `cards` twice.
pub struct BoardController {
    store: Arc<dyn BoardStore>,
    session: Arc<dyn SessionGuard>,
    confirmation: Arc<dyn AsyncConfirmation>,
    current_user: CurrentUser,
    state: Mutex<BoardState>,
    updates: watch::Sender<BoardState>,
    profile_edits: Debouncer,
    pending_edits: Mutex<Vec<(String, FieldUpdate<Value>)>>,
}

impl BoardController {
    /// Pass the session guard, then read the current user once.
    ///
    /// Fails when the guard refuses access or when the stored current-user
    /// record is missing or cannot be decoded.
    pub async fn initialize(
        collaborators: Collaborators,
        debounce: Duration,
    ) -> ScrumboardResult<Self> {
        collaborators.session.redirect_if_not_logged_in().await?;

        let record = collaborators.storage.read_current_user().await?;
        let current_user = CurrentUser::from_record(record.as_deref())?;
        info!("Board controller ready for user {}", current_user.id);

        let state = BoardState::new(current_user.clone());
        let (updates, _) = watch::channel(state.clone());

        Ok(Self {
            store: collaborators.store,
            session: collaborators.session,
            confirmation: collaborators.confirmation,
            current_user,
            state: Mutex::new(state),
            updates,
            profile_edits: Debouncer::new(debounce),
            pending_edits: Mutex::new(Vec::new()),
        })
    }

    pub fn current_user(&self) -> &CurrentUser {
        &self.current_user
    }

    pub fn snapshot(&self) -> BoardState {
        self.state.lock().clone()
    }

    /// Receives a fresh `BoardState` after every change
    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.updates.subscribe()
    }

    /// Apply a change and publish the result while still holding the lock,
    /// so subscribers never see snapshots out of order
    fn mutate<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        let mut state = self.state.lock();
        let result = f(&mut state);
        self.updates.send_replace(state.clone());
        result
    }

    /// Load the board and the current user's profile side by side
    pub async fn start(&self) {
        let user_id = self.current_user.id;
        futures::join!(self.load_board(), self.load_user_profile(user_id));
    }

    pub async fn load_board(&self) {
        match self.store.fetch_lists().await {
            Ok(lists) => {
                let (list_count, card_count) = self.mutate(|state| {
                    state.replace_lists(lists);
                    (state.lists.len(), state.cards.len())
                });
                debug!("Loaded {} lists with {} cards", list_count, card_count);
            }
            Err(e) => warn!("Failed to load board: {}", e),
        }
    }

    pub async fn load_user_profile(&self, user_id: UserId) {
        match self.store.fetch_user(user_id).await {
            Ok(user_data) => {
                self.mutate(|state| state.user_data = user_data);
                debug!("Loaded profile for user {}", user_id);
            }
            Err(e) => debug!("Failed to load profile for user {}: {}", user_id, e),
        }
    }

    /// Create a card at the end of `target`. Returns the card the server
    /// created, or `None` when nothing changed.
    ///
    /// The card always lands in the flattened view. It lands in its list
    /// only if `lists` has not been reloaded while the request was in flight
    /// and the list is still on the board; a reloaded list already carries
    /// whatever the server holds.
    pub async fn create_card(&self, target: &BoardList, title: impl Into<String>) -> Option<Card> {
        let payload = NewCard {
            list: target.id,
            title: title.into(),
        };
        let generation = self.state.lock().lists_generation();

        match self.store.create_card(&payload).await {
            Ok(card) => {
                let attached = self.mutate(|state| {
                    state.append_created_card(target.id, card.clone(), generation)
                });
                if !attached {
                    debug!(
                        "List {} was reloaded or removed; card {} kept in the card view only",
                        target.id, card.id
                    );
                }
                info!("Created card {} in list {}", card.id, target.id);
                Some(card)
            }
            Err(e) => {
                warn!("Failed to create card in list {}: {}", target.id, e);
                None
            }
        }
    }

    /// Create a list and close the add-list panel. On failure the panel
    /// stays open.
    pub async fn create_list(&self, name: impl Into<String>) -> Option<BoardList> {
        let payload = NewList { name: name.into() };

        match self.store.create_list(&payload).await {
            Ok(list) => {
                self.mutate(|state| {
                    state.lists.push(list.clone());
                    state.panels.close_add_list();
                });
                info!("Created list {} '{}'", list.id, list.name);
                Some(list)
            }
            Err(e) => {
                warn!("Failed to create list '{}': {}", payload.name, e);
                None
            }
        }
    }

    /// Ask the user, then delete `list` remotely and drop whatever sits at
    /// `index` locally.
    ///
    /// The local removal is positional; the list is not looked up again by
    /// id. Its cards stay in the flattened view. Returns `true` only when a
    /// list was removed locally.
    pub async fn confirm_and_delete_list(
        &self,
        index: usize,
        list: &BoardList,
        display_name: &str,
    ) -> bool {
        let prompt = format!("Are you sure to delete this list {}?", display_name);
        if !self.confirmation.confirm(&prompt).await {
            debug!("Deletion of list {} declined", list.id);
            return false;
        }

        match self.store.delete_list(list.id).await {
            Ok(()) => {
                let removed = self.mutate(|state| {
                    if index < state.lists.len() {
                        state.lists.remove(index);
                        true
                    } else {
                        false
                    }
                });
                if removed {
                    info!("Deleted list {} at position {}", list.id, index);
                } else {
                    warn!(
                        "Deleted list {} remotely but position {} is past the end of the board",
                        list.id, index
                    );
                }
                removed
            }
            Err(e) => {
                warn!("Failed to delete list {}: {}", list.id, e);
                false
            }
        }
    }

    /// Send the profile as it is right now. The returned future is the
    /// pending request; the controller does not look at its outcome.
    pub fn update_user_profile(&self) -> BoxFuture<'static, ScrumboardResult<UserData>> {
        let fields = self.state.lock().user_data.clone();
        let store = Arc::clone(&self.store);
        let user_id = self.current_user.id;
        debug!("Updating profile for user {} ({} fields)", user_id, fields.len());
        Box::pin(async move { store.update_user(user_id, &fields).await })
    }

    /// Queue a profile field edit. Edits made in quick succession are
    /// applied together, followed by one profile update, once no edit has
    /// arrived for the debounce delay.
    ///
    /// The pending timer does not keep the controller alive: dropping the
    /// last handle discards queued edits without sending them.
    pub fn edit_profile_field(self: &Arc<Self>, field: impl Into<String>, update: FieldUpdate<Value>) {
        self.pending_edits.lock().push((field.into(), update));

        let controller = Arc::downgrade(self);
        self.profile_edits.schedule(async move {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            if let Some(Err(e)) = controller.commit_profile_edits().await {
                warn!("Failed to update profile: {}", e);
            }
        });
    }

    /// Apply queued edits now instead of waiting for the debounce delay.
    /// `None` when nothing was queued.
    pub async fn flush_profile_edits(&self) -> Option<ScrumboardResult<UserData>> {
        self.profile_edits.cancel();
        self.commit_profile_edits().await
    }

    pub fn has_pending_profile_edits(&self) -> bool {
        !self.pending_edits.lock().is_empty()
    }

    async fn commit_profile_edits(&self) -> Option<ScrumboardResult<UserData>> {
        let edits = std::mem::take(&mut *self.pending_edits.lock());
        if edits.is_empty() {
            return None;
        }

        self.mutate(|state| {
            for (field, update) in edits {
                state.user_data.apply(field, update);
            }
        });
        Some(self.update_user_profile().await)
    }

    pub async fn logout(&self) -> ScrumboardResult<()> {
        info!("Logging out user {}", self.current_user.id);
        self.session.logout().await
    }

    pub fn open_panel(&self, panel: Panel) {
        self.mutate(|state| state.panels.open(panel));
    }

    pub fn close_panel(&self, panel: Panel) {
        self.mutate(|state| state.panels.close(panel));
    }

    pub fn set_ordering(&self, ordering: CardOrdering) {
        self.mutate(|state| state.ordering = ordering);
    }
}
