use clap::error::ErrorKind;
use clap::Parser;

use lgtm_stamp::cli::{execute_stamp, Cli, StampCommandConfig, EXIT_FAILURE, EXIT_SUCCESS};

#[tokio::main]
async fn main() {
    // clapの既定の引数エラーコード(2)ではなく1で終了させるため、
    // try_parseで明示的にマッピングする。ヘルプとバージョンは正常終了。
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let code = match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_FAILURE,
            };
            let _ = error.print();
            std::process::exit(code);
        }
    };

    let config = StampCommandConfig {
        directory: cli.directory,
        output: cli.output,
        force: cli.force,
        threads: cli.threads,
    };

    match execute_stamp(config).await {
        Ok(_summary) => {
            // 個々のファイルの失敗があってもバッチ自体は成功扱い
            std::process::exit(EXIT_SUCCESS);
        }
        Err(error) => {
            eprintln!("❌ エラー: {error}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}
