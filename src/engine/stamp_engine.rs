// StampEngine - 完全依存性注入による並列スタンプエンジン
// 全ての依存関係がコンストラクタで注入される真のDIパターン実装

use super::pipeline::StampPipeline;
use crate::{
    compositor::CompositorBackend,
    core::{types::StampJob, OutcomeReporter, StampConfig, StampError, StampResult, StampSummary},
    image_loader::ImageLoaderBackend,
    image_writer::ImageWriterBackend,
    mask_loader::MaskLoaderBackend,
    storage::StorageBackend,
};
use std::path::Path;
use std::sync::Arc;

/// 完全依存性注入による並列スタンプエンジン
///
/// 全ての依存関係がコンストラクタで注入される。
/// マスクは処理開始時に一度だけ読み込み、全ワーカーでArc共有する。
pub struct StampEngine<L, M, C, W, S, F, R> {
    loader: Arc<L>,
    mask_loader: Arc<M>,
    compositor: Arc<C>,
    writer: Arc<W>,
    storage: Arc<S>,
    config: Arc<F>,
    reporter: Arc<R>,
}

impl<L, M, C, W, S, F, R> StampEngine<L, M, C, W, S, F, R>
where
    L: ImageLoaderBackend + 'static,
    M: MaskLoaderBackend + 'static,
    C: CompositorBackend + 'static,
    W: ImageWriterBackend + 'static,
    S: StorageBackend + 'static,
    F: StampConfig,
    R: OutcomeReporter + 'static,
{
    /// 新しいスタンプエンジンを作成
    ///
    /// 全ての依存関係をコンストラクタで注入する（Constructor Injection）
    pub fn new(
        loader: L,
        mask_loader: M,
        compositor: C,
        writer: W,
        storage: S,
        config: F,
        reporter: R,
    ) -> Self {
        Self {
            loader: Arc::new(loader),
            mask_loader: Arc::new(mask_loader),
            compositor: Arc::new(compositor),
            writer: Arc::new(writer),
            storage: Arc::new(storage),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
        }
    }

    /// 指定されたジョブを並列処理
    ///
    /// ファイル発見から処理完了まで全てを管理する高レベルAPI
    pub async fn process_directory(&self, job: &StampJob) -> StampResult<StampSummary> {
        self.validate_config()?;

        // ファイル発見
        let files = self.discover_files(&job.input_dir).await?;

        // ファイルリスト処理
        self.process_files(files, job).await
    }

    /// 指定されたファイルリストを並列処理
    ///
    /// ファイル発見を済ませている場合の細かい制御用API
    pub async fn process_files(
        &self,
        files: Vec<String>,
        job: &StampJob,
    ) -> StampResult<StampSummary> {
        self.validate_config()?;

        // マスクは一度だけ読み込んで全ワーカーで共有する
        let mask = self
            .mask_loader
            .load_mask()
            .await
            .map_err(|e| StampError::mask_load(self.mask_loader.mask_id(), e))?;
        let mask = Arc::new(mask);

        let pipeline = StampPipeline::new(
            Arc::clone(&self.loader),
            Arc::clone(&self.compositor),
            Arc::clone(&self.writer),
            Arc::clone(&self.storage),
        );

        pipeline
            .execute(
                files,
                mask,
                job,
                self.config.as_ref(),
                Arc::clone(&self.reporter),
            )
            .await
            .map_err(|e| StampError::channel(format!("パイプライン実行エラー: {e}")))
    }

    /// ディレクトリから処理対象ファイルを発見
    ///
    /// 直下の通常ファイルを全て対象にする。サブディレクトリには
    /// 入らない。拡張子による絞り込みもしない。
    async fn discover_files(&self, input_dir: &Path) -> StampResult<Vec<String>> {
        let directory = input_dir.to_string_lossy();

        let items = self
            .storage
            .list_items(&directory)
            .await
            .map_err(|e| StampError::file_discovery(directory.as_ref(), e))?;

        let mut files = Vec::new();
        for item in items {
            if !item.is_directory {
                files.push(item.id);
            }
        }

        files.sort(); // 一貫した順序で処理
        Ok(files)
    }

    /// 設定検証
    fn validate_config(&self) -> StampResult<()> {
        if self.config.max_concurrent_tasks() == 0 {
            return Err(StampError::configuration(
                "並列タスク数は1以上である必要があります",
            ));
        }

        if self.config.channel_buffer_size() == 0 {
            return Err(StampError::configuration(
                "チャンネルバッファサイズは1以上である必要があります",
            ));
        }

        Ok(())
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &F {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// マスクローダーへの参照を取得
    pub fn mask_loader(&self) -> &M {
        &self.mask_loader
    }
}
