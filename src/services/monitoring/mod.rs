// 結果報告機能
// ファイル単位の結果行の出力、開始・完了通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleOutcomeReporter, MemoryOutcomeReporter, NoOpOutcomeReporter};
