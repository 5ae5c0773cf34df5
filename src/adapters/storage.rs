use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Reads files from disk. Relative paths resolve against `base_path`; absolute
/// paths (such as `/usr/share/dict/words`) are used unchanged.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(Path::new(path));
        tracing::debug!("Reading {}", full_path.display());
        // 讀完即釋放檔案句柄
        let data = tokio::fs::read(&full_path).await?;
        Ok(data)
    }
}
