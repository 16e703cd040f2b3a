use async_trait::async_trait;
use scrumboard_core::ScrumboardResult;
use scrumboard_domain::CurrentUser;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::atomic_writer::AtomicWriter;
use super::SessionStorage;

/// Current-user record kept as a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    pub async fn write(&self, user: &CurrentUser) -> ScrumboardResult<()> {
        let record = user.to_record()?;
        AtomicWriter::write_atomic(&self.path, record.as_bytes()).await?;
        tracing::info!("Stored session for user {} at {}", user.id, self.path.display());
        Ok(())
    }

    /// Remove the record. Clearing an absent record is not an error.
    pub async fn clear(&self) -> ScrumboardResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::info!("Cleared session at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn read_current_user(&self) -> ScrumboardResult<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(record) => {
                tracing::debug!("Read {} bytes from {}", record.len(), self.path.display());
                Ok(Some(record))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_and_read_record() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));
        let user = CurrentUser {
            id: 5,
            username: Some("mahdi".to_string()),
            token: None,
        };

        storage.write(&user).await.unwrap();
        assert!(storage.exists().await);

        let record = storage.read_current_user().await.unwrap();
        assert_eq!(CurrentUser::from_record(record.as_deref()).unwrap(), user);
    }

    #[tokio::test]
    async fn test_missing_record_reads_as_none() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));

        assert!(storage.read_current_user().await.unwrap().is_none());
        assert!(!storage.exists().await);
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));
        storage.write(&CurrentUser::new(1)).await.unwrap();

        storage.clear().await.unwrap();
        storage.clear().await.unwrap();

        assert!(storage.read_current_user().await.unwrap().is_none());
    }
}
