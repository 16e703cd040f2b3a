mod atomic_writer;
pub mod file;
pub mod guard;

pub use file::FileSessionStorage;
pub use guard::StoredSessionGuard;

use async_trait::async_trait;
use scrumboard_core::ScrumboardResult;

/// Gatekeeper for authenticated access
#[async_trait]
pub trait SessionGuard: Send + Sync {
    /// Succeeds only when a user is logged in. An error means the caller
    /// must not proceed; the guard has already sent the user to log in.
    async fn redirect_if_not_logged_in(&self) -> ScrumboardResult<()>;

    async fn logout(&self) -> ScrumboardResult<()>;
}

/// Client-side storage holding the serialized current-user record
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// The raw record, or `None` when nothing is stored
    async fn read_current_user(&self) -> ScrumboardResult<Option<String>>;
}
