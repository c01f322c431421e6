// Worker - 単一ファイル処理機能

use crate::compositor::CompositorBackend;
use crate::core::types::{StampJob, StampMetadata, StampOutcome};
use crate::image_loader::ImageLoaderBackend;
use crate::image_writer::ImageWriterBackend;
use crate::storage::StorageBackend;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// 出力先パスの決定
///
/// 入力のファイル名部分を出力ディレクトリにつなげる。
fn destination_path(output_dir: &Path, source_path: &str) -> PathBuf {
    let source = Path::new(source_path);
    match source.file_name() {
        Some(name) => output_dir.join(name),
        None => output_dir.join(source),
    }
}

/// 単一ファイルの処理
///
/// 読み込み、マスク合成、存在チェック、書き込みを順に行う。
/// 存在チェックは合成後に行う。失敗は結果として返し、
/// 他のファイルの処理には影響させない。
pub async fn stamp_single_file<L, C, W, S>(
    loader: &L,
    compositor: &C,
    writer: &W,
    storage: &S,
    mask: &Arc<DynamicImage>,
    job: &StampJob,
    source_path: &str,
    _worker_id: usize,
) -> StampOutcome
where
    L: ImageLoaderBackend,
    C: CompositorBackend,
    W: ImageWriterBackend,
    S: StorageBackend,
{
    let start_time = Instant::now();

    let destination = destination_path(&job.output_dir, source_path);
    let destination_str = destination.to_string_lossy().to_string();

    let result = async {
        // 画像読み込み
        let load_result = loader.load_from_path(Path::new(source_path)).await?;
        let file_size = load_result.file_size;
        let source_dimensions = load_result.dimensions;

        // マスク合成
        let composite = compositor
            .compose(load_result.image, Arc::clone(mask))
            .await?;

        // 出力先の存在チェック。forceでない限り上書きしない
        if !job.force && storage.exists(&destination_str).await? {
            return anyhow::Result::<Option<StampMetadata>>::Ok(None);
        }

        // 書き込み
        writer.write_image(composite.image, &destination).await?;

        let metadata = StampMetadata {
            file_size,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
            source_dimensions,
        };

        Ok(Some(metadata))
    }
    .await;

    match result {
        Ok(Some(metadata)) => StampOutcome::Stamped {
            source_path: source_path.to_string(),
            output_path: destination_str,
            metadata,
        },
        Ok(None) => StampOutcome::Skipped {
            source_path: source_path.to_string(),
            output_path: destination_str,
        },
        Err(error) => StampOutcome::Failed {
            source_path: source_path.to_string(),
            error: error.to_string(),
        },
    }
}
