use clap::Parser;
use followcheck::{Cli, FollowCheck, FollowCheckError};
use std::process;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();
    let app = FollowCheck::from_cli(&cli);

    match app.analyze() {
        Ok(report) => {
            app.output_formatter().print_analysis_report(&report);
            0
        }
        Err(e) => {
            app.handle_error(&e);
            exit_code(&e)
        }
    }
}

// Map error kinds to distinct exit codes for scripting
fn exit_code(error: &FollowCheckError) -> i32 {
    match error {
        FollowCheckError::NotFound { .. } => 2,
        FollowCheckError::Decode { .. } => 3,
        FollowCheckError::Io(_) => 1,
    }
}
