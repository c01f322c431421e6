use super::{StorageBackend, StorageItem};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;

/// ローカルファイルシステム用のストレージバックエンド
#[derive(Clone)]
pub struct LocalStorageBackend;

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn path_to_storage_item(path: &Path) -> Result<StorageItem> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        Ok(StorageItem {
            id: path.to_string_lossy().to_string(),
            name,
            size: metadata.len(),
            is_directory: metadata.is_dir(),
        })
    }
}

#[async_trait]
impl StorageBackend for LocalStorageBackend {
    async fn list_items(&self, directory: &str) -> Result<Vec<StorageItem>> {
        let path = Path::new(directory);
        let mut items = Vec::new();

        // 非同期でディレクトリを読み込む（1階層のみ）
        let mut entries = tokio::fs::read_dir(path)
            .await
            .with_context(|| format!("Failed to read directory: {directory}"))?;

        while let Some(entry) = entries.next_entry().await? {
            if let Ok(item) = Self::path_to_storage_item(&entry.path()) {
                items.push(item);
            }
        }

        Ok(items)
    }

    async fn exists(&self, id: &str) -> Result<bool> {
        let path = Path::new(id);
        Ok(path.exists())
    }
}
