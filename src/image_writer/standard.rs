use super::{ImageWriterBackend, WriteResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};
use std::path::Path;
use std::time::Instant;

/// 標準的な画像ライター実装
///
/// 拡張子からエンコーダを選ぶ。JPEGはアルファチャンネルを
/// 受け付けないので、書き込み前にRGBへ変換する。
#[derive(Clone, Debug)]
pub struct StandardImageWriter;

impl Default for StandardImageWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardImageWriter {
    /// 新しい標準画像ライターを作成
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageWriterBackend for StandardImageWriter {
    async fn write_image(&self, image: DynamicImage, path: &Path) -> Result<WriteResult> {
        let start_time = Instant::now();

        let format = ImageFormat::from_path(path)
            .with_context(|| format!("Unsupported output format for: {}", path.display()))?;

        let image = if format == ImageFormat::Jpeg && image.color().has_alpha() {
            DynamicImage::ImageRgb8(image.to_rgb8())
        } else {
            image
        };

        tokio::task::spawn_blocking({
            let path = path.to_path_buf();
            move || image.save_with_format(&path, format)
        })
        .await
        .context("Failed to spawn blocking task for image writing")?
        .with_context(|| format!("Failed to write image file: {}", path.display()))?;

        Ok(WriteResult {
            write_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    fn strategy_name(&self) -> &'static str {
        "Standard"
    }
}
