use crate::error::{FollowCheckError, UserFriendlyError};
use crate::AnalysisReport;
use console::{style, Color, Emoji, Term};
use serde_json;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

// Emojis with text fallbacks
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static ROCKET: Emoji = Emoji("🚀 ", "> ");
static SPARKLES: Emoji = Emoji("✨ ", "* ");

pub struct OutputFormatter {
    #[allow(dead_code)]
    term: Term,
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let term = Term::stdout();
        let use_colors = match mode {
            OutputMode::Human => term.features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            term,
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    eprintln!("{}{}", CROSS, style(message).red().bold());
                } else {
                    eprintln!("✗ {}", message);
                }
            }
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", WARNING, style(message).yellow().bold());
                    } else {
                        println!("! {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => println!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", INFO, style(message).cyan());
                    } else {
                        println!("i {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", ROCKET, style(operation).bold());
                    } else {
                        println!("> {}", operation);
                    }
                }
                OutputMode::Json => self.print_json_message("operation_start", operation),
                OutputMode::Plain => println!("STARTING: {}", operation),
            }
        }
    }

    // User-friendly error handling
    pub fn print_user_friendly_error(&self, error: &FollowCheckError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    println!();
                    if self.use_colors {
                        println!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        println!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    println!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    // Full analysis report
    pub fn print_analysis_report(&self, report: &AnalysisReport) {
        match self.mode {
            OutputMode::Human => self.print_human_report(report),
            OutputMode::Json => {
                let json_output =
                    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            OutputMode::Plain => self.print_plain_report(report),
        }
    }

    pub fn print_header(&self, title: &str) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                println!();
                if self.use_colors {
                    println!("{} {}", SPARKLES, style(title).bold().cyan());
                } else {
                    println!("=== {} ===", title);
                }
                println!();
            }
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "header",
                    "title": title
                }));
            }
            OutputMode::Plain => {
                println!("=== {} ===", title);
            }
        }
    }

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_human_report(&self, report: &AnalysisReport) {
        self.print_header("Follow Analysis");

        let following_count = report.following.len();
        let followers_count = report.followers.len();
        if self.use_colors {
            println!(
                "You follow {} accounts, and you have {} followers.",
                style(following_count).cyan().bold(),
                style(followers_count).cyan().bold()
            );
        } else {
            println!(
                "You follow {} accounts, and you have {} followers.",
                following_count, followers_count
            );
        }

        let ghosting = report.not_followed_back.len();
        let ghosted = report.not_following_back.len();
        if self.use_colors {
            println!(
                "{} {} not following you back.",
                style(ghosting).yellow().bold(),
                account_verb(ghosting)
            );
            println!(
                "You are not following back {} {}.",
                style(ghosted).red().bold(),
                account_noun(ghosted)
            );
        } else {
            println!("{} {} not following you back.", ghosting, account_verb(ghosting));
            println!("You are not following back {} {}.", ghosted, account_noun(ghosted));
        }
        println!();

        if self.should_show_message(1) {
            self.print_handle_list("Accounts you follow", &report.following, Color::Blue);
            self.print_handle_list("Accounts following you", &report.followers, Color::Magenta);
        }

        self.print_handle_list(
            "Accounts you are not following back",
            &report.not_following_back,
            Color::Red,
        );
        self.print_handle_list(
            "Accounts not following you back",
            &report.not_followed_back,
            Color::Yellow,
        );
    }

    fn print_plain_report(&self, report: &AnalysisReport) {
        println!("REPORT: Follow analysis");
        println!("Following: {}", report.following.len());
        println!("Followers: {}", report.followers.len());
        println!("Not following you back: {}", report.not_followed_back.len());
        println!(
            "You are not following back: {}",
            report.not_following_back.len()
        );
        println!();

        if self.should_show_message(1) {
            self.print_handle_list("Accounts you follow", &report.following, Color::White);
            self.print_handle_list("Accounts following you", &report.followers, Color::White);
        }

        self.print_handle_list(
            "Accounts you are not following back",
            &report.not_following_back,
            Color::White,
        );
        self.print_handle_list(
            "Accounts not following you back",
            &report.not_followed_back,
            Color::White,
        );
    }

    fn print_handle_list(&self, title: &str, handles: &[String], color: Color) {
        if self.use_colors {
            println!(
                "{} ({}):",
                style(title).green().bold(),
                style(handles.len()).cyan()
            );
            for handle in handles {
                println!("  - {}", style(handle).fg(color));
            }
        } else {
            println!("{} ({}):", title, handles.len());
            for handle in handles {
                println!("  - {}", handle);
            }
        }
        println!();
    }
}

fn account_verb(count: usize) -> &'static str {
    if count == 1 {
        "account is"
    } else {
        "accounts are"
    }
}

fn account_noun(count: usize) -> &'static str {
    if count == 1 {
        "account"
    } else {
        "accounts"
    }
}
