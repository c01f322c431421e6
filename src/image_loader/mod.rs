use anyhow::Result;
use async_trait::async_trait;
use image::DynamicImage;
use std::path::Path;

pub mod standard;

/// 画像読み込みの結果情報
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// 読み込まれた画像
    pub image: DynamicImage,
    /// 画像サイズ
    pub dimensions: (u32, u32),
    /// 元ファイルのサイズ（バイト）
    pub file_size: u64,
    /// 読み込みにかかった時間（ミリ秒）
    pub load_time_ms: u64,
}

/// 画像読み込みバックエンドのトレイト
///
/// フォーマットはファイル内容から判定する。拡張子は参照しない。
#[async_trait]
pub trait ImageLoaderBackend: Send + Sync {
    /// バイト配列から画像を読み込む
    async fn load_from_bytes(&self, data: &[u8]) -> Result<LoadResult>;

    /// ファイルパスから画像を読み込む
    async fn load_from_path(&self, path: &Path) -> Result<LoadResult>;

    /// 読み込み戦略の名前を取得
    fn strategy_name(&self) -> &'static str;
}
