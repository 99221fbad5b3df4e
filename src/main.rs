use html_grader::logger::{self, Verbosity};
use html_grader::GradeError;
use std::io::Write;
use std::process::ExitCode;

mod cli;
mod commands;

use cli::Cli;

/// Exit status for failures that are not a `GradeError`, such as a failed stdout write.
const EXIT_UNEXPECTED: u8 = 3;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    if let Err(e) = logger::init(Verbosity::from(cli.verbose)) {
        eprintln!("warning: {e}");
    }

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            let _ = writeln!(std::io::stdout(), "{e}");
            return ExitCode::from(e.exit_code());
        }
    };

    match commands::handle_grade(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<GradeError>()
        .map(GradeError::exit_code)
        .unwrap_or(EXIT_UNEXPECTED)
}
