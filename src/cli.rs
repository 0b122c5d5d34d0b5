use std::path::PathBuf;

use clap::Parser;

/// save - run static analyzer test suites described by save.toml files
#[derive(Parser, Debug)]
#[command(name = "save")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Suite directory, save.toml, or a single test resource
    pub path: PathBuf,

    /// Only run tests whose file path contains one of these fragments
    pub tests: Vec<String>,

    /// Directory for working copies and tool artifacts [default: <temp>/save]
    #[arg(long)]
    pub scratch_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
