//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

/// What font build can we plan for you today?
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The family configuration file
    #[arg(short, long)]
    pub config: PathBuf,

    /// A font model snapshot written by the source loader
    #[arg(short, long)]
    pub model: PathBuf,

    /// Working directory; STAT definitions are written here
    #[arg(short, long)]
    #[clap(default_value = "build")]
    pub build_dir: PathBuf,

    /// Where to write the recipe. Stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
