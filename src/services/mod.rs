// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod processing;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::DefaultStampConfig;
pub use monitoring::{ConsoleOutcomeReporter, MemoryOutcomeReporter, NoOpOutcomeReporter};
pub use processing::stamp_single_file;
