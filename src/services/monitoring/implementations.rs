// 結果報告の具象実装

use crate::core::{OutcomeReporter, StampJob, StampSummary};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// コンソール出力による結果報告実装
///
/// ファイル単位の結果行は常に出力する。成功行はstdout、
/// スキップと失敗の行はstderrに書く。開始・完了のバナーは
/// stderr行きで、quietモードでは抑制される。
#[derive(Debug, Default, Clone)]
pub struct ConsoleOutcomeReporter {
    quiet: bool,
}

impl ConsoleOutcomeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    /// 実行時設定のバナーを出力する
    ///
    /// 結果行と同じくstderr行き。quietモードでは抑制される。
    pub fn report_configuration(&self, job: &StampJob, worker_count: usize) {
        if self.quiet {
            return;
        }
        eprintln!("📂 対象ディレクトリ: {}", job.input_dir.display());
        eprintln!("📂 出力ディレクトリ: {}", job.output_dir.display());
        eprintln!("⚙️  並列ワーカー数: {worker_count}");
    }
}

#[async_trait]
impl OutcomeReporter for ConsoleOutcomeReporter {
    async fn report_started(&self, total_files: usize) {
        if !self.quiet {
            eprintln!("🚀 Stamping {total_files} files...");
        }
    }

    async fn report_stamped(&self, output_path: &str) {
        println!("[success] {output_path}");
    }

    async fn report_skipped(&self, output_path: &str) {
        eprintln!("[already exists] {output_path}");
    }

    async fn report_failure(&self, source_path: &str, error: &str) {
        eprintln!("[{error}] {source_path}");
    }

    async fn report_completed(&self, summary: &StampSummary) {
        if !self.quiet {
            eprintln!(
                "✅ Completed! Stamped: {}, Skipped: {}, Errors: {}",
                summary.stamped_files, summary.skipped_files, summary.error_count
            );
        }
    }
}

/// 何もしない結果報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpOutcomeReporter;

impl NoOpOutcomeReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutcomeReporter for NoOpOutcomeReporter {
    async fn report_started(&self, _total_files: usize) {
        // 何もしない
    }

    async fn report_stamped(&self, _output_path: &str) {
        // 何もしない
    }

    async fn report_skipped(&self, _output_path: &str) {
        // 何もしない
    }

    async fn report_failure(&self, _source_path: &str, _error: &str) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &StampSummary) {
        // 何もしない
    }
}

/// メモリ内に記録する結果報告実装（テスト用）
/// Cloneしても同じ記録領域を共有する
#[derive(Debug, Clone)]
pub struct MemoryOutcomeReporter {
    stamped: Arc<Mutex<Vec<String>>>,
    skipped: Arc<Mutex<Vec<String>>>,
    failures: Arc<Mutex<Vec<(String, String)>>>,
    last_summary: Arc<Mutex<Option<StampSummary>>>,
}

impl Default for MemoryOutcomeReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryOutcomeReporter {
    pub fn new() -> Self {
        Self {
            stamped: Arc::new(Mutex::new(Vec::new())),
            skipped: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(Vec::new())),
            last_summary: Arc::new(Mutex::new(None)),
        }
    }

    /// テスト用：成功したファイルの出力パス一覧を取得
    pub fn stamped_paths(&self) -> Vec<String> {
        self.stamped.lock().unwrap().clone()
    }

    /// テスト用：スキップされたファイルの出力パス一覧を取得
    pub fn skipped_paths(&self) -> Vec<String> {
        self.skipped.lock().unwrap().clone()
    }

    /// テスト用：失敗の(入力パス, エラー)一覧を取得
    pub fn failures(&self) -> Vec<(String, String)> {
        self.failures.lock().unwrap().clone()
    }

    /// テスト用：最後に報告されたサマリーを取得
    pub fn last_summary(&self) -> Option<StampSummary> {
        self.last_summary.lock().unwrap().clone()
    }

    /// テスト用：記録をクリア
    pub fn clear(&self) {
        self.stamped.lock().unwrap().clear();
        self.skipped.lock().unwrap().clear();
        self.failures.lock().unwrap().clear();
        *self.last_summary.lock().unwrap() = None;
    }
}

#[async_trait]
impl OutcomeReporter for MemoryOutcomeReporter {
    async fn report_started(&self, _total_files: usize) {
        // 開始通知は記録しない
    }

    async fn report_stamped(&self, output_path: &str) {
        self.stamped.lock().unwrap().push(output_path.to_string());
    }

    async fn report_skipped(&self, output_path: &str) {
        self.skipped.lock().unwrap().push(output_path.to_string());
    }

    async fn report_failure(&self, source_path: &str, error: &str) {
        self.failures
            .lock()
            .unwrap()
            .push((source_path.to_string(), error.to_string()));
    }

    async fn report_completed(&self, summary: &StampSummary) {
        *self.last_summary.lock().unwrap() = Some(summary.clone());
    }
}
