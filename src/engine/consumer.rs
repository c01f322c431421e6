// Consumer - 並列ワーカー機能

use crate::{
    compositor::CompositorBackend,
    core::types::{StampJob, StampOutcome},
    image_loader::ImageLoaderBackend,
    image_writer::ImageWriterBackend,
    services::processing::stamp_single_file,
    storage::StorageBackend,
};
use anyhow::Result;
use image::DynamicImage;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 単一Consumerワーカー
#[allow(clippy::too_many_arguments)]
pub fn spawn_single_consumer<L, C, W, S>(
    worker_id: usize,
    loader: Arc<L>,
    compositor: Arc<C>,
    writer: Arc<W>,
    storage: Arc<S>,
    mask: Arc<DynamicImage>,
    job: Arc<StampJob>,
    work_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<String>>>,
    result_tx: mpsc::Sender<StampOutcome>,
    semaphore: Arc<tokio::sync::Semaphore>,
) -> tokio::task::JoinHandle<Result<()>>
where
    L: ImageLoaderBackend + 'static,
    C: CompositorBackend + 'static,
    W: ImageWriterBackend + 'static,
    S: StorageBackend + 'static,
{
    tokio::spawn(async move {
        loop {
            // 次の作業を取得
            let source_path = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(path) => path,
                    None => break, // チャンネル終了
                }
            };

            // セマフォで同時実行数制御
            let _permit = semaphore
                .acquire()
                .await
                .map_err(|e| anyhow::anyhow!("Semaphore error: {}", e))?;

            // 単一ファイル処理
            let outcome = stamp_single_file(
                loader.as_ref(),
                compositor.as_ref(),
                writer.as_ref(),
                storage.as_ref(),
                &mask,
                &job,
                &source_path,
                worker_id,
            )
            .await;

            // 結果送信
            if (result_tx.send(outcome).await).is_err() {
                // 結果チャンネルが閉じられた場合は終了
                break;
            }
        }
        Ok(())
    })
}

/// Consumers: 並列ワーカープール
#[allow(clippy::too_many_arguments)]
pub fn spawn_consumers<L, C, W, S>(
    loader: Arc<L>,
    compositor: Arc<C>,
    writer: Arc<W>,
    storage: Arc<S>,
    mask: Arc<DynamicImage>,
    job: Arc<StampJob>,
    work_rx: mpsc::Receiver<String>,
    result_tx: mpsc::Sender<StampOutcome>,
    semaphore: Arc<tokio::sync::Semaphore>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<Result<()>>>
where
    L: ImageLoaderBackend + 'static,
    C: CompositorBackend + 'static,
    W: ImageWriterBackend + 'static,
    S: StorageBackend + 'static,
{
    let work_rx = Arc::new(tokio::sync::Mutex::new(work_rx));
    let mut handles = Vec::new();

    for worker_id in 0..worker_count {
        let handle = spawn_single_consumer(
            worker_id,
            Arc::clone(&loader),
            Arc::clone(&compositor),
            Arc::clone(&writer),
            Arc::clone(&storage),
            Arc::clone(&mask),
            Arc::clone(&job),
            Arc::clone(&work_rx),
            result_tx.clone(),
            Arc::clone(&semaphore),
        );
        handles.push(handle);
    }

    handles
}
