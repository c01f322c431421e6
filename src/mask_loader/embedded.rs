use super::MaskLoaderBackend;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use image::DynamicImage;
use rust_embed::RustEmbed;

/// バイナリに埋め込むマスク素材
#[derive(RustEmbed)]
#[folder = "assets/"]
struct StampAssets;

/// 既定のマスク素材の識別子
pub const DEFAULT_MASK_ASSET: &str = "lgtm_mask.png";

/// 埋め込みアセットからマスクを読み込むローダー
///
/// 外部ファイルに依存しないので、バイナリ単体で動作する。
#[derive(Clone, Debug)]
pub struct EmbeddedMaskLoader {
    asset_id: String,
}

impl Default for EmbeddedMaskLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedMaskLoader {
    /// 既定のマスク素材を使うローダーを作成
    pub fn new() -> Self {
        Self {
            asset_id: DEFAULT_MASK_ASSET.to_string(),
        }
    }

    /// 別の埋め込み素材を指定してローダーを作成
    pub fn with_asset(asset_id: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
        }
    }
}

#[async_trait]
impl MaskLoaderBackend for EmbeddedMaskLoader {
    async fn load_mask(&self) -> Result<DynamicImage> {
        let asset = StampAssets::get(&self.asset_id)
            .ok_or_else(|| anyhow!("Embedded mask asset not found: {}", self.asset_id))?;

        let mask = tokio::task::spawn_blocking({
            let data = asset.data.to_vec();
            move || image::load_from_memory(&data)
        })
        .await
        .context("Failed to spawn blocking task for mask loading")?
        .with_context(|| format!("Failed to decode embedded mask asset: {}", self.asset_id))?;

        Ok(mask)
    }

    fn mask_id(&self) -> &str {
        &self.asset_id
    }
}
