// CLI層 - コマンドライン引数の定義と処理
// ユーザーインターフェースとアプリケーションロジックの橋渡し

pub mod args;
pub mod commands;

// 公開API
pub use args::*;
pub use commands::*;

/// 正常終了時のプロセス終了コード
pub const EXIT_SUCCESS: i32 = 0;

/// 致命的エラー時のプロセス終了コード
///
/// 個々のファイルの失敗ではなく、バッチ自体が開始できなかった場合にのみ使う。
pub const EXIT_FAILURE: i32 = 1;
