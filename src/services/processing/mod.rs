// 画像処理機能
// 単一画像ファイルの読み込み、マスク合成、書き込み

pub mod worker;

// 公開API
pub use worker::stamp_single_file;
