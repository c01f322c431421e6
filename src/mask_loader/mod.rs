use anyhow::Result;
use async_trait::async_trait;
use image::DynamicImage;
use mockall::automock;

pub mod embedded;

pub use embedded::{EmbeddedMaskLoader, DEFAULT_MASK_ASSET};

/// マスク素材読み込みのトレイト
///
/// マスクは起動時に一度だけ読み込み、全ワーカーで共有する。
#[automock]
#[async_trait]
pub trait MaskLoaderBackend: Send + Sync {
    /// マスク画像を読み込む
    async fn load_mask(&self) -> Result<DynamicImage>;

    /// マスク素材の識別子を取得
    fn mask_id(&self) -> &str;
}

#[async_trait]
impl MaskLoaderBackend for Box<dyn MaskLoaderBackend> {
    async fn load_mask(&self) -> Result<DynamicImage> {
        self.as_ref().load_mask().await
    }

    fn mask_id(&self) -> &str {
        self.as_ref().mask_id()
    }
}
