// Producer - 入力ファイル配信機能

use anyhow::Result;
use tokio::sync::mpsc;

/// Producer: 処理対象のファイルパスを配信
pub fn spawn_source_producer(
    files: Vec<String>,
    work_tx: mpsc::Sender<String>,
) -> tokio::task::JoinHandle<Result<()>> {
    tokio::spawn(async move {
        for source_path in files {
            if (work_tx.send(source_path).await).is_err() {
                // チャンネルが閉じられた場合は正常終了
                break;
            }
        }
        // work_txをドロップしてチャンネル終了シグナル
        Ok(())
    })
}
