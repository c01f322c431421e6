// 統合テストハーネス
// 各テストモジュールを単一のテストターゲットとしてまとめる

mod test_cli_interface;
mod test_end_to_end;
