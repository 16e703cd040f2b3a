use async_trait::async_trait;
use scrumboard_core::{ScrumboardError, ScrumboardResult};

use super::{FileSessionStorage, SessionGuard};

/// Treats a stored session file as "logged in"
#[derive(Debug, Clone)]
pub struct StoredSessionGuard {
    storage: FileSessionStorage,
}

impl StoredSessionGuard {
    pub fn new(storage: FileSessionStorage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl SessionGuard for StoredSessionGuard {
    async fn redirect_if_not_logged_in(&self) -> ScrumboardResult<()> {
        if self.storage.exists().await {
            return Ok(());
        }
        tracing::warn!("No session at {}", self.storage.path().display());
        Err(ScrumboardError::NotLoggedIn(format!(
            "no session stored at {}; run `scrumboard session set --user-id <ID>` first",
            self.storage.path().display()
        )))
    }

    async fn logout(&self) -> ScrumboardResult<()> {
        self.storage.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrumboard_domain::CurrentUser;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_guard_requires_session_file() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));
        let guard = StoredSessionGuard::new(storage.clone());

        let err = guard.redirect_if_not_logged_in().await.unwrap_err();
        assert!(matches!(err, ScrumboardError::NotLoggedIn(_)));

        storage.write(&CurrentUser::new(2)).await.unwrap();
        assert!(guard.redirect_if_not_logged_in().await.is_ok());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));
        storage.write(&CurrentUser::new(2)).await.unwrap();
        let guard = StoredSessionGuard::new(storage.clone());

        guard.logout().await.unwrap();

        assert!(!storage.exists().await);
        assert!(guard.redirect_if_not_logged_in().await.is_err());
    }
}
