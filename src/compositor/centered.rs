use super::{CompositeResult, CompositorBackend};
use anyhow::{Context, Result};
use async_trait::async_trait;
use image::{imageops, DynamicImage, Rgba, RgbaImage};
use std::sync::Arc;
use std::time::Instant;

/// マスクを中央に重ね合わせるコンポジッタ
///
/// マスクが元画像より大きい場合は、はみ出した部分を切り捨てて
/// 見える範囲だけ合成する。
#[derive(Clone, Debug)]
pub struct CenteredCompositor {
    opacity: f32,
}

impl Default for CenteredCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl CenteredCompositor {
    /// マスクのアルファをそのまま使うコンポジッタを作成
    pub fn new() -> Self {
        Self { opacity: 1.0 }
    }

    /// 不透明度を指定してコンポジッタを作成（0.0から1.0）
    pub fn with_opacity(opacity: f32) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    fn compose_blocking(source: DynamicImage, mask: &DynamicImage, opacity: f32) -> DynamicImage {
        let mut canvas = source.to_rgba8();
        let mask = mask.to_rgba8();

        // 中央配置。マスクの方が大きいと負座標になる
        let x = (canvas.width() as i64 - mask.width() as i64) / 2;
        let y = (canvas.height() as i64 - mask.height() as i64) / 2;

        if opacity >= 1.0 {
            imageops::overlay(&mut canvas, &mask, x, y);
        } else {
            blend_scaled(&mut canvas, &mask, x, y, opacity);
        }

        DynamicImage::ImageRgba8(canvas)
    }
}

#[async_trait]
impl CompositorBackend for CenteredCompositor {
    async fn compose(
        &self,
        source: DynamicImage,
        mask: Arc<DynamicImage>,
    ) -> Result<CompositeResult> {
        let start_time = Instant::now();
        let opacity = self.opacity;

        let image = tokio::task::spawn_blocking(move || {
            Self::compose_blocking(source, &mask, opacity)
        })
        .await
        .context("Failed to spawn blocking task for mask compositing")?;

        Ok(CompositeResult {
            image,
            composite_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    fn strategy_name(&self) -> &'static str {
        "Centered"
    }
}

/// 不透明度を掛けたアルファ合成
///
/// はみ出す範囲は合成前に切り詰める。
fn blend_scaled(target: &mut RgbaImage, mask: &RgbaImage, x0: i64, y0: i64, opacity: f32) {
    let x_start = x0.max(0);
    let y_start = y0.max(0);
    let x_end = (x0 + mask.width() as i64).min(target.width() as i64);
    let y_end = (y0 + mask.height() as i64).min(target.height() as i64);

    for ty in y_start..y_end {
        for tx in x_start..x_end {
            let mx = (tx - x0) as u32;
            let my = (ty - y0) as u32;

            let mask_pixel = *mask.get_pixel(mx, my);
            let base_pixel = *target.get_pixel(tx as u32, ty as u32);

            let blended = blend_over(base_pixel, mask_pixel, opacity);
            target.put_pixel(tx as u32, ty as u32, blended);
        }
    }
}

/// Porter-Duffのover演算子によるピクセル合成
fn blend_over(background: Rgba<u8>, foreground: Rgba<u8>, opacity: f32) -> Rgba<u8> {
    let fg_alpha = (foreground[3] as f32 / 255.0) * opacity;
    let bg_alpha = background[3] as f32 / 255.0;

    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);
    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend_channel = |fg: u8, bg: u8| -> u8 {
        let fg_f = fg as f32 / 255.0;
        let bg_f = bg as f32 / 255.0;
        let result = (fg_f * fg_alpha + bg_f * bg_alpha * (1.0 - fg_alpha)) / out_alpha;
        (result * 255.0).clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend_channel(foreground[0], background[0]),
        blend_channel(foreground[1], background[1]),
        blend_channel(foreground[2], background[2]),
        (out_alpha * 255.0) as u8,
    ])
}
