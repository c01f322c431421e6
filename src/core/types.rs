// スタンプ処理に関連するデータ型定義

use std::path::PathBuf;

/// 1回のバッチ処理の指定内容
///
/// ワーカー全体で読み取り専用として共有される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampJob {
    /// 入力画像のあるディレクトリ
    pub input_dir: PathBuf,
    /// 合成結果を書き出すディレクトリ
    pub output_dir: PathBuf,
    /// 既存ファイルの上書きを許可するか
    pub force: bool,
}

impl StampJob {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            force,
        }
    }
}

/// 処理時のメタデータ
#[derive(Debug, Clone, PartialEq)]
pub struct StampMetadata {
    pub file_size: u64,
    pub processing_time_ms: u64,
    pub source_dimensions: (u32, u32),
}

/// 処理全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct StampSummary {
    pub total_files: usize,
    pub stamped_files: usize,
    pub skipped_files: usize,
    pub error_count: usize,
    pub total_processing_time_ms: u64,
    pub average_time_per_file_ms: f64,
}

/// 個別ファイル処理の結果
#[derive(Debug)]
pub enum StampOutcome {
    /// 合成と書き込みに成功した
    Stamped {
        source_path: String,
        output_path: String,
        metadata: StampMetadata,
    },
    /// 出力先が既に存在するためスキップした
    Skipped {
        source_path: String,
        output_path: String,
    },
    /// 読み込み・合成・書き込みのいずれかで失敗した
    Failed { source_path: String, error: String },
}
