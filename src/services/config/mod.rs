// 設定管理機能
// 並列度やチャンネルサイズなどの実行時設定

pub mod implementations;

// 公開API
pub use implementations::DefaultStampConfig;
