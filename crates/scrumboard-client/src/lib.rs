pub mod confirm;
pub mod controller;
pub mod debounce;
pub mod session;
pub mod store;

pub use confirm::{AlwaysConfirm, AsyncConfirmation, Confirmation};
pub use controller::{BoardController, BoardState, Collaborators};
pub use debounce::Debouncer;
pub use session::{FileSessionStorage, SessionGuard, SessionStorage, StoredSessionGuard};
pub use store::{BoardStore, HttpBoardStore};
