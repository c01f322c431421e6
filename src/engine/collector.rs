// Collector - 結果収集と報告機能

use crate::core::types::StampOutcome;
use crate::core::OutcomeReporter;
use anyhow::Result;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::sync::mpsc;

/// Collector: 結果を集約して報告する
///
/// 結果行の出力を1タスクに集約することで、ワーカーの出力が
/// 行単位で混ざらないようにしている。
pub fn spawn_outcome_collector<R>(
    mut result_rx: mpsc::Receiver<StampOutcome>,
    stamped_count: Arc<AtomicUsize>,
    skipped_count: Arc<AtomicUsize>,
    error_count: Arc<AtomicUsize>,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<Result<()>>
where
    R: OutcomeReporter + 'static,
{
    tokio::spawn(async move {
        let mut stamped = 0;
        let mut skipped = 0;
        let mut errors = 0;

        while let Some(outcome) = result_rx.recv().await {
            match outcome {
                StampOutcome::Stamped { output_path, .. } => {
                    reporter.report_stamped(&output_path).await;
                    stamped += 1;
                }
                StampOutcome::Skipped { output_path, .. } => {
                    reporter.report_skipped(&output_path).await;
                    skipped += 1;
                }
                StampOutcome::Failed { source_path, error } => {
                    reporter.report_failure(&source_path, &error).await;
                    errors += 1;
                }
            }
        }

        // カウンタ更新
        stamped_count.store(stamped, Ordering::Relaxed);
        skipped_count.store(skipped, Ordering::Relaxed);
        error_count.store(errors, Ordering::Relaxed);

        Ok(())
    })
}
