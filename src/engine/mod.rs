// エンジン層 - 並列処理とオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod collector;
pub mod consumer;
mod pipeline;
pub mod producer;
pub mod stamp_engine;

// 公開API - 主要エンジンクラス
pub use api::{
    create_default_stamp_engine, create_quiet_stamp_engine, stamp_directory_with_engine,
    stamp_files_with_engine,
};
pub use stamp_engine::StampEngine;
