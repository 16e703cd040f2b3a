pub mod card;
pub mod field_update;
pub mod filter;
pub mod list;
pub mod sort;
pub mod tag;
pub mod user;
pub mod view;
pub mod visibility;

pub use card::{Card, CardId, NewCard, DEFAULT_TAG_COLOR};
pub use field_update::FieldUpdate;
pub use filter::{CardFilter, CompositeFilter, ListFilter, TagFilter, TitleFilter};
pub use list::{BoardList, ListId, NewList};
pub use sort::{CardOrdering, SortField};
pub use tag::Tag;
pub use user::{CurrentUser, UserData, UserId};
pub use visibility::{Panel, PanelVisibility};
