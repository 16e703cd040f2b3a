pub mod http;

pub use http::HttpBoardStore;

use async_trait::async_trait;
use scrumboard_core::ScrumboardResult;
use scrumboard_domain::{BoardList, Card, ListId, NewCard, NewList, UserData, UserId};

/// Remote source of truth for lists, cards and users.
///
/// Every method is a single request; implementations do not retry and do
/// not time out on their own.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// All lists, each with its cards nested in board order
    async fn fetch_lists(&self) -> ScrumboardResult<Vec<BoardList>>;

    async fn create_card(&self, card: &NewCard) -> ScrumboardResult<Card>;

    async fn create_list(&self, list: &NewList) -> ScrumboardResult<BoardList>;

    async fn delete_list(&self, id: ListId) -> ScrumboardResult<()>;

    async fn fetch_user(&self, id: UserId) -> ScrumboardResult<UserData>;

    /// Partial update; only the fields present in `fields` are sent
    async fn update_user(&self, id: UserId, fields: &UserData) -> ScrumboardResult<UserData>;
}
