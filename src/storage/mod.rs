use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

pub mod local;

/// ストレージ内のアイテムを表す構造体
#[derive(Debug, Clone)]
pub struct StorageItem {
    /// アイテムの識別子（ローカルならパス、S3ならオブジェクトキー）
    pub id: String,
    /// アイテム名（ファイル名）
    pub name: String,
    /// アイテムのサイズ（バイト）
    pub size: u64,
    /// アイテムがディレクトリかどうか
    pub is_directory: bool,
}

/// ストレージバックエンドのトレイト
///
/// 列挙は1階層のみで再帰しない。拡張子による絞り込みも行わない
/// （画像かどうかはデコード時に判明する）。
#[automock]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// ディレクトリ直下のアイテムをリストする
    async fn list_items(&self, directory: &str) -> Result<Vec<StorageItem>>;

    /// アイテムが存在するかチェック
    async fn exists(&self, id: &str) -> Result<bool>;
}

// StorageBackend for Box<dyn StorageBackend>
#[async_trait]
impl StorageBackend for Box<dyn StorageBackend> {
    async fn list_items(&self, directory: &str) -> Result<Vec<StorageItem>> {
        self.as_ref().list_items(directory).await
    }

    async fn exists(&self, id: &str) -> Result<bool> {
        self.as_ref().exists(id).await
    }
}
