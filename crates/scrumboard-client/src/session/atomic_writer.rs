use scrumboard_core::ScrumboardResult;
use std::path::Path;
use tokio::fs;

/// Write-to-temp-file then rename, so a crash never leaves a half-written
/// session record behind
pub(crate) struct AtomicWriter;

impl AtomicWriter {
    pub(crate) async fn write_atomic(path: &Path, data: &[u8]) -> ScrumboardResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;

        // Same directory keeps the rename on one filesystem
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.into_temp_path();

        fs::write(&temp_path, data).await?;
        temp_path.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested/session.json");

        AtomicWriter::write_atomic(&file_path, b"{\"id\":1}")
            .await
            .unwrap();

        assert_eq!(std::fs::read(&file_path).unwrap(), b"{\"id\":1}");
    }

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("session.json");

        AtomicWriter::write_atomic(&file_path, b"First").await.unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").await.unwrap();

        assert_eq!(std::fs::read(&file_path).unwrap(), b"Second");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
