use crate::{
    compositor::CenteredCompositor,
    core::{StampConfig, StampJob, StampSummary},
    engine::StampEngine,
    image_loader::standard::StandardImageLoader,
    image_writer::StandardImageWriter,
    mask_loader::EmbeddedMaskLoader,
    services::{ConsoleOutcomeReporter, DefaultStampConfig},
    storage::local::LocalStorageBackend,
};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration struct for the stamp command
pub struct StampCommandConfig {
    pub directory: PathBuf,
    pub output: PathBuf,
    pub force: bool,
    pub threads: Option<usize>,
}

/// Execute the stamp command
///
/// ディレクトリ検証、エンジン構築、バッチ実行までを担当する。
/// 個々のファイルの失敗はサマリーに載るだけで、コマンド自体は成功する。
pub async fn execute_stamp(config: StampCommandConfig) -> Result<StampSummary> {
    // Validate input directory
    if !config.directory.exists() {
        anyhow::bail!(
            "Input directory does not exist: {}",
            config.directory.display()
        );
    }

    if !config.directory.is_dir() {
        anyhow::bail!(
            "Input path is not a directory: {}",
            config.directory.display()
        );
    }

    // Validate output directory
    if !config.output.exists() {
        anyhow::bail!(
            "Output directory does not exist: {}",
            config.output.display()
        );
    }

    if !config.output.is_dir() {
        anyhow::bail!(
            "Output path is not a directory: {}",
            config.output.display()
        );
    }

    let mut stamp_config = DefaultStampConfig::default();
    if let Some(threads) = config.threads {
        stamp_config = stamp_config.with_max_concurrent(threads);
    }

    // 設定バナーはレポーターに任せる（quietレポーターなら出ない）
    let reporter = ConsoleOutcomeReporter::new();
    let job = StampJob::new(config.directory, config.output, config.force);
    reporter.report_configuration(&job, stamp_config.max_concurrent_tasks());

    let engine = StampEngine::new(
        StandardImageLoader::new(),
        EmbeddedMaskLoader::new(),
        CenteredCompositor::new(),
        StandardImageWriter::new(),
        LocalStorageBackend::new(),
        stamp_config,
        reporter,
    );

    let summary = engine.process_directory(&job).await?;

    Ok(summary)
}
