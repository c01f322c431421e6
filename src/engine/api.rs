// 高レベル公開API
// StampEngineを簡単に使用できるようにするための便利な関数

use super::StampEngine;
use crate::{
    compositor::CompositorBackend,
    core::{
        error::StampResult, types::StampJob, OutcomeReporter, StampConfig, StampSummary,
    },
    image_loader::ImageLoaderBackend,
    image_writer::ImageWriterBackend,
    mask_loader::MaskLoaderBackend,
    services::{ConsoleOutcomeReporter, DefaultStampConfig, NoOpOutcomeReporter},
    storage::StorageBackend,
};

// ========================================
// DI対応API - StampEngineベース
// ========================================

/// 設定済みStampEngineでディレクトリを処理（DI推奨）
///
/// 全ての依存関係が事前注入されたエンジンを使用する真のDI API
pub async fn stamp_directory_with_engine<L, M, C, W, S, F, R>(
    job: &StampJob,
    engine: &StampEngine<L, M, C, W, S, F, R>,
) -> StampResult<StampSummary>
where
    L: ImageLoaderBackend + 'static,
    M: MaskLoaderBackend + 'static,
    C: CompositorBackend + 'static,
    W: ImageWriterBackend + 'static,
    S: StorageBackend + 'static,
    F: StampConfig,
    R: OutcomeReporter + 'static,
{
    engine.process_directory(job).await
}

/// 設定済みStampEngineでファイルリストを処理（DI推奨）
///
/// ファイル発見を済ませた場合に使用する細かい制御用API
pub async fn stamp_files_with_engine<L, M, C, W, S, F, R>(
    files: Vec<String>,
    job: &StampJob,
    engine: &StampEngine<L, M, C, W, S, F, R>,
) -> StampResult<StampSummary>
where
    L: ImageLoaderBackend + 'static,
    M: MaskLoaderBackend + 'static,
    C: CompositorBackend + 'static,
    W: ImageWriterBackend + 'static,
    S: StorageBackend + 'static,
    F: StampConfig,
    R: OutcomeReporter + 'static,
{
    engine.process_files(files, job).await
}

/// StampEngine作成のヘルパー関数
///
/// デフォルト設定での簡単なエンジン作成
pub fn create_default_stamp_engine<L, M, C, W, S>(
    loader: L,
    mask_loader: M,
    compositor: C,
    writer: W,
    storage: S,
) -> StampEngine<L, M, C, W, S, DefaultStampConfig, ConsoleOutcomeReporter>
where
    L: ImageLoaderBackend + 'static,
    M: MaskLoaderBackend + 'static,
    C: CompositorBackend + 'static,
    W: ImageWriterBackend + 'static,
    S: StorageBackend + 'static,
{
    StampEngine::new(
        loader,
        mask_loader,
        compositor,
        writer,
        storage,
        DefaultStampConfig::default(),
        ConsoleOutcomeReporter::new(),
    )
}

/// StampEngine作成のヘルパー関数（静音版）
///
/// テストやバックグラウンド処理用の静音エンジン作成
pub fn create_quiet_stamp_engine<L, M, C, W, S>(
    loader: L,
    mask_loader: M,
    compositor: C,
    writer: W,
    storage: S,
) -> StampEngine<L, M, C, W, S, DefaultStampConfig, NoOpOutcomeReporter>
where
    L: ImageLoaderBackend + 'static,
    M: MaskLoaderBackend + 'static,
    C: CompositorBackend + 'static,
    W: ImageWriterBackend + 'static,
    S: StorageBackend + 'static,
{
    StampEngine::new(
        loader,
        mask_loader,
        compositor,
        writer,
        storage,
        DefaultStampConfig::default(),
        NoOpOutcomeReporter::new(),
    )
}
