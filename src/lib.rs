pub mod cli;
pub mod comparator;
pub mod error;
pub mod extractor;
pub mod reader;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use comparator::{diff, DiffReport};
pub use error::{FollowCheckError, Result, UserFriendlyError};
pub use extractor::UsernameExtractor;
pub use ui::{OutputFormatter, OutputMode};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The complete result of one analysis run, handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub following: Vec<String>,
    pub followers: Vec<String>,
    pub not_followed_back: Vec<String>,
    pub not_following_back: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    fn new(following: Vec<String>, followers: Vec<String>, result: DiffReport) -> Self {
        Self {
            following,
            followers,
            not_followed_back: result.not_followed_back,
            not_following_back: result.not_following_back,
            analyzed_at: Utc::now(),
        }
    }
}

/// Main library interface: read both exports, recover the handle lists and
/// compute the asymmetric differences.
pub struct FollowCheck {
    following_file: PathBuf,
    followers_file: PathBuf,
    output_formatter: OutputFormatter,
}

impl FollowCheck {
    pub fn new(
        following_file: PathBuf,
        followers_file: PathBuf,
        output_mode: OutputMode,
        verbose: u8,
        quiet: bool,
    ) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            following_file,
            followers_file,
            output_formatter,
        }
    }

    /// Create a FollowCheck instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Self {
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Self::new(
            cli_args.following_file.clone(),
            cli_args.followers_file.clone(),
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        )
    }

    /// Run the full pipeline: read both files, extract the handle lists and
    /// diff them in both directions.
    pub fn analyze(&self) -> Result<AnalysisReport> {
        self.output_formatter
            .start_operation("Analyzing your social media presence");

        let following = self.load_handles(&self.following_file)?;
        let followers = self.load_handles(&self.followers_file)?;

        let result = comparator::diff(&following, &followers);

        self.output_formatter.debug(&format!(
            "diff: {} not followed back, {} not following back",
            result.not_followed_back.len(),
            result.not_following_back.len()
        ));

        Ok(AnalysisReport::new(following, followers, result))
    }

    /// Read one export file and extract its handle list
    fn load_handles(&self, path: &Path) -> Result<Vec<String>> {
        let lines = reader::read_lines(path)?;
        let handles = UsernameExtractor::new().extract(&lines);

        // A non-empty export that yields no handles usually means the wrong
        // file was exported. Worth a diagnostic, never a failure.
        if handles.is_empty() && !lines.is_empty() {
            self.output_formatter.warning(&format!(
                "No handles recognized in {}; is this a Follow/Followers export?",
                path.display()
            ));
        }

        self.output_formatter.info(&format!(
            "{}: {} handles extracted from {} lines",
            path.display(),
            handles.len(),
            lines.len()
        ));

        Ok(handles)
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &FollowCheckError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
