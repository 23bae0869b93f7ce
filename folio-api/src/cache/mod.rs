use std::collections::HashMap;
use std::io;

use tokio::io::AsyncReadExt;

/// In-memory byte cache for served photo files, keyed by file path.
pub struct FileCache {
    entries: HashMap<String, Vec<u8>>,
}

impl FileCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the cached bytes for a path, loading the file on a miss.
    pub async fn get_or_load(&mut self, path: &str) -> io::Result<Vec<u8>> {
        if let Some(bytes) = self.entries.get(path) {
            return Ok(bytes.clone());
        }
        let file = tokio::fs::File::open(path).await?;
        let mut reader = tokio::io::BufReader::new(file);
        let mut buf = vec![];
        reader.read_to_end(&mut buf).await?;
        self.entries.insert(path.to_owned(), buf.clone());
        Ok(buf)
    }

    /// Drops a path from the cache, returning the bytes that were held.
    pub fn evict(&mut self, path: &str) -> Option<Vec<u8>> {
        self.entries.remove(path)
    }
}
