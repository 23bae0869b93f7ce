use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Filesystem store for uploaded photo bytes.
#[derive(Clone)]
pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes the bytes under a freshly generated file name and returns that name.
    pub async fn save(&self, extension: &str, bytes: &[u8]) -> io::Result<String> {
        tokio::fs::create_dir_all(&self.root).await?;
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        tokio::fs::write(self.root.join(&file_name), bytes).await?;
        Ok(file_name)
    }

    /// Path of a stored file, as persisted in the photo row.
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Removes a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, path: impl AsRef<Path>) -> io::Result<()> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn saves_bytes_under_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());

        let name = store.save("png", b"pixels").await.unwrap();
        assert!(name.ends_with(".png"));

        let stored = std::fs::read(store.path_of(&name)).unwrap();
        assert_eq!(stored, b"pixels");

        let other = store.save("png", b"pixels").await.unwrap();
        assert_ne!(name, other);
    }

    #[actix_web::test]
    async fn remove_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());

        let name = store.save("jpg", b"pixels").await.unwrap();
        let path = store.path_of(&name);
        store.remove(&path).await.unwrap();
        assert!(!path.exists());
        store.remove(&path).await.unwrap();
    }
}
