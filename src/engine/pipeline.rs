// Pipeline - Producer-Consumer パイプライン
// メインパイプライン機能とオーケストレーション

use super::{
    collector::spawn_outcome_collector, consumer::spawn_consumers, producer::spawn_source_producer,
};
use crate::{
    compositor::CompositorBackend,
    core::{types::StampJob, OutcomeReporter, StampConfig, StampSummary},
    image_loader::ImageLoaderBackend,
    image_writer::ImageWriterBackend,
    storage::StorageBackend,
};
use anyhow::Result;
use image::DynamicImage;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Instant;
use tokio::sync::mpsc;

/// 責任が明確に分離されたパイプライン
pub struct StampPipeline<L, C, W, S> {
    loader: Arc<L>,
    compositor: Arc<C>,
    writer: Arc<W>,
    storage: Arc<S>,
}

impl<L, C, W, S> StampPipeline<L, C, W, S>
where
    L: ImageLoaderBackend + 'static,
    C: CompositorBackend + 'static,
    W: ImageWriterBackend + 'static,
    S: StorageBackend + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(loader: Arc<L>, compositor: Arc<C>, writer: Arc<W>, storage: Arc<S>) -> Self {
        Self {
            loader,
            compositor,
            writer,
            storage,
        }
    }

    /// ファイルリストを処理
    pub async fn execute<F, R>(
        &self,
        files: Vec<String>,
        mask: Arc<DynamicImage>,
        job: &StampJob,
        config: &F,
        reporter: Arc<R>,
    ) -> Result<StampSummary>
    where
        F: StampConfig,
        R: OutcomeReporter + 'static,
    {
        let start_time = Instant::now();

        // Producer-Consumerチャンネル構築
        let (work_tx, work_rx) = mpsc::channel::<String>(config.channel_buffer_size());
        let (result_tx, result_rx) = mpsc::channel(config.channel_buffer_size());

        // 同期プリミティブ - AtomicUsizeで効率的なカウンター
        let semaphore = Arc::new(tokio::sync::Semaphore::new(config.max_concurrent_tasks()));
        let stamped_count = Arc::new(AtomicUsize::new(0));
        let skipped_count = Arc::new(AtomicUsize::new(0));
        let error_count = Arc::new(AtomicUsize::new(0));

        let total_files = files.len();
        if config.enable_progress_reporting() {
            reporter.report_started(total_files).await;
        }

        // Producer起動
        let producer_handle = spawn_source_producer(files, work_tx);

        // Consumer Pool起動
        let consumer_handles = spawn_consumers(
            Arc::clone(&self.loader),
            Arc::clone(&self.compositor),
            Arc::clone(&self.writer),
            Arc::clone(&self.storage),
            Arc::clone(&mask),
            Arc::new(job.clone()),
            work_rx,
            result_tx.clone(),
            semaphore,
            config.max_concurrent_tasks(),
        );

        // Result Collector起動
        let collector_handle = spawn_outcome_collector(
            result_rx,
            stamped_count.clone(),
            skipped_count.clone(),
            error_count.clone(),
            Arc::clone(&reporter),
        );

        // Producer完了を待機
        producer_handle.await??;

        // Consumer完了を待機
        for handle in consumer_handles {
            handle.await??;
        }

        // result_txを閉じてCollectorに完了を通知
        drop(result_tx);

        // Collector完了を待機
        collector_handle.await??;

        // 集計 - AtomicUsizeからのload
        let final_stamped = stamped_count.load(Ordering::Relaxed);
        let final_skipped = skipped_count.load(Ordering::Relaxed);
        let final_errors = error_count.load(Ordering::Relaxed);

        let total_time_ms = start_time.elapsed().as_millis() as u64;
        let average_time_per_file_ms = if total_files > 0 {
            total_time_ms as f64 / total_files as f64
        } else {
            0.0
        };

        let summary = StampSummary {
            total_files,
            stamped_files: final_stamped,
            skipped_files: final_skipped,
            error_count: final_errors,
            total_processing_time_ms: total_time_ms,
            average_time_per_file_ms,
        };

        if config.enable_progress_reporting() {
            reporter.report_completed(&summary).await;
        }

        Ok(summary)
    }
}
