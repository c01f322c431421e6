// Custom error types for the stamping pipeline
// スタンプ処理専用のカスタムエラー型定義

use thiserror::Error;

/// スタンプ処理で発生する致命的エラー型
///
/// 個々のファイルの失敗はここには現れない（ワーカーが結果として扱う）。
/// この型のエラーはバッチ全体を中断させる。
#[derive(Error, Debug)]
pub enum StampError {
    #[error("マスク素材読み込みエラー: {asset} - {source}")]
    MaskLoadError {
        asset: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("ファイル発見エラー: {path} - {source}")]
    FileDiscoveryError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl StampError {
    /// マスク読み込みエラーの作成
    pub fn mask_load(asset: impl Into<String>, source: anyhow::Error) -> Self {
        Self::MaskLoadError {
            asset: asset.into(),
            source,
        }
    }

    /// ファイル発見エラーの作成
    pub fn file_discovery(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::FileDiscoveryError {
            path: path.into(),
            source,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 内部エラーの作成
    pub fn internal(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }
}

// From実装を個別に追加
impl From<anyhow::Error> for StampError {
    fn from(error: anyhow::Error) -> Self {
        StampError::InternalError { source: error }
    }
}

impl From<tokio::task::JoinError> for StampError {
    fn from(error: tokio::task::JoinError) -> Self {
        StampError::TaskError { source: error }
    }
}

/// スタンプ処理の結果型
pub type StampResult<T> = std::result::Result<T, StampError>;
