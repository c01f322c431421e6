use super::{ImageLoaderBackend, LoadResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::time::Instant;

/// 標準的な画像ローダー実装
///
/// デコードはimageクレートに委譲する。フォーマットはバイト列の
/// 先頭から推定するので、拡張子のないファイルも読み込める。
#[derive(Clone, Debug)]
pub struct StandardImageLoader;

impl Default for StandardImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardImageLoader {
    /// 新しい標準画像ローダーを作成
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageLoaderBackend for StandardImageLoader {
    async fn load_from_bytes(&self, data: &[u8]) -> Result<LoadResult> {
        let start_time = Instant::now();
        let file_size = data.len() as u64;

        let image = tokio::task::spawn_blocking({
            let data = data.to_vec();
            move || image::load_from_memory(&data)
        })
        .await
        .context("Failed to spawn blocking task for image loading")?
        .context("Failed to decode image from memory")?;

        let dimensions = (image.width(), image.height());
        let load_time_ms = start_time.elapsed().as_millis() as u64;

        Ok(LoadResult {
            image,
            dimensions,
            file_size,
            load_time_ms,
        })
    }

    async fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let start_time = Instant::now();

        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image file: {}", path.display()))?;
        let file_size = data.len() as u64;

        let image = tokio::task::spawn_blocking(move || image::load_from_memory(&data))
            .await
            .context("Failed to spawn blocking task for image loading")?
            .with_context(|| format!("Failed to decode image: {}", path.display()))?;

        let dimensions = (image.width(), image.height());
        let load_time_ms = start_time.elapsed().as_millis() as u64;

        Ok(LoadResult {
            image,
            dimensions,
            file_size,
            load_time_ms,
        })
    }

    fn strategy_name(&self) -> &'static str {
        "Standard"
    }
}
