use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lgtm_stamp")]
#[command(about = "Stamp an embedded LGTM overlay onto every image in a directory")]
#[command(version)]
pub struct Cli {
    /// Input directory containing the source images
    #[arg(short, long)]
    pub directory: PathBuf,

    /// Output directory for the stamped images
    #[arg(short, long)]
    pub output: PathBuf,

    /// Overwrite existing output files without skipping
    #[arg(short, long)]
    pub force: bool,

    /// Number of worker tasks to use for parallel processing
    #[arg(short, long)]
    pub threads: Option<usize>,
}
