use anyhow::Result;
use async_trait::async_trait;
use image::DynamicImage;
use std::sync::Arc;

pub mod centered;

pub use centered::CenteredCompositor;

/// マスク合成の結果情報
#[derive(Debug, Clone)]
pub struct CompositeResult {
    /// 合成済みの画像
    pub image: DynamicImage,
    /// 合成にかかった時間（ミリ秒）
    pub composite_time_ms: u64,
}

/// マスク合成のトレイト
///
/// 元画像の画素の上にマスクをアルファ合成する。マスクは全ワーカーで
/// 共有するためArcで受け取る。
#[async_trait]
pub trait CompositorBackend: Send + Sync {
    /// 元画像にマスクを重ね合わせる
    async fn compose(
        &self,
        source: DynamicImage,
        mask: Arc<DynamicImage>,
    ) -> Result<CompositeResult>;

    /// 合成戦略の名前を取得
    fn strategy_name(&self) -> &'static str;
}
