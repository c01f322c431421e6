pub mod cli;
pub mod compositor;
pub mod core;
pub mod engine;
pub mod image_loader;
pub mod image_writer;
pub mod mask_loader;
pub mod services;
pub mod storage;

// 公開API - 主要な型と関数を明示的にエクスポート
pub use cli::{EXIT_FAILURE, EXIT_SUCCESS};
pub use crate::core::{
    StampConfig, StampError, StampJob, StampOutcome, StampResult, StampSummary,
};
pub use engine::{
    create_default_stamp_engine, create_quiet_stamp_engine, stamp_directory_with_engine,
    stamp_files_with_engine, StampEngine,
};
pub use services::{
    ConsoleOutcomeReporter, DefaultStampConfig, MemoryOutcomeReporter, NoOpOutcomeReporter,
};
