// スタンプ処理システムのトレイト定義
// 横断的な抽象化インターフェースを定義

use super::types::StampSummary;
use async_trait::async_trait;
use mockall::automock;

/// 並列処理の設定を抽象化するトレイト
#[automock]
pub trait StampConfig: Send + Sync {
    /// 最大同時実行タスク数を取得
    fn max_concurrent_tasks(&self) -> usize;

    /// チャンネルバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

// StampConfig for Box<dyn StampConfig>
impl StampConfig for Box<dyn StampConfig> {
    fn max_concurrent_tasks(&self) -> usize {
        self.as_ref().max_concurrent_tasks()
    }

    fn channel_buffer_size(&self) -> usize {
        self.as_ref().channel_buffer_size()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// 処理結果報告の抽象化トレイト
///
/// 1ファイルにつき必ず1回、stamped / skipped / failure のいずれかが呼ばれる。
#[automock]
#[async_trait]
pub trait OutcomeReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_files: usize);

    /// 合成成功の報告
    async fn report_stamped(&self, output_path: &str);

    /// 出力先が既存のためスキップした報告
    async fn report_skipped(&self, output_path: &str);

    /// 処理失敗の報告
    async fn report_failure(&self, source_path: &str, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, summary: &StampSummary);
}

// OutcomeReporter for Box<dyn OutcomeReporter>
#[async_trait]
impl OutcomeReporter for Box<dyn OutcomeReporter> {
    async fn report_started(&self, total_files: usize) {
        self.as_ref().report_started(total_files).await
    }

    async fn report_stamped(&self, output_path: &str) {
        self.as_ref().report_stamped(output_path).await
    }

    async fn report_skipped(&self, output_path: &str) {
        self.as_ref().report_skipped(output_path).await
    }

    async fn report_failure(&self, source_path: &str, error: &str) {
        self.as_ref().report_failure(source_path, error).await
    }

    async fn report_completed(&self, summary: &StampSummary) {
        self.as_ref().report_completed(summary).await
    }
}
