use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "followcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare exported following/followers lists and report who does not follow back")]
#[command(
    long_about = "Followcheck reads two text exports of an account's Follow and Followers \
                       panels, recovers the handle list from each, and reports the accounts \
                       that do not follow you back and the accounts you do not follow back."
)]
#[command(after_help = "EXAMPLES:\n  \
    followcheck\n  \
    followcheck --following-file my_following.txt --followers-file my_followers.txt\n  \
    followcheck --verbose\n  \
    followcheck --output-format json --quiet\n\n\
    Copy the Follow/Followers panels from the website into the two input files:\n  \
    following.txt -> accounts you follow\n  \
    followers.txt -> accounts following you")]
pub struct Cli {
    /// File containing the accounts you follow
    #[arg(long, default_value = "following.txt")]
    pub following_file: PathBuf,

    /// File containing the accounts following you
    #[arg(long, default_value = "followers.txt")]
    pub followers_file: PathBuf,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv); prints the full followed/followers lists
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
