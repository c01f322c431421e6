use anyhow::Result;
use async_trait::async_trait;
use image::DynamicImage;
use std::path::Path;

pub mod standard;

pub use standard::StandardImageWriter;

/// 画像書き込みの結果情報
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// 書き込みにかかった時間（ミリ秒）
    pub write_time_ms: u64,
}

/// 画像書き込みバックエンドのトレイト
///
/// 出力フォーマットは書き込み先パスの拡張子から決定する。
#[async_trait]
pub trait ImageWriterBackend: Send + Sync {
    /// 画像をファイルに書き込む
    async fn write_image(&self, image: DynamicImage, path: &Path) -> Result<WriteResult>;

    /// 書き込み戦略の名前を取得
    fn strategy_name(&self) -> &'static str;
}
