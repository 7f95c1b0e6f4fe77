//! task - priority-ordered personal task list

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = task_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
