//! # Shopcart Entry Point
//!
//! Runs the interactive shell and maps failures to a non-zero exit code.

use std::process::ExitCode;

use shopcart_cli::error::UserError;

fn main() -> ExitCode {
    match shopcart_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let user_error = UserError::from(&e);
            tracing::error!(code = ?user_error.code, error = %e, "Shell terminated");
            eprintln!("Error: {}", user_error.message);
            ExitCode::FAILURE
        }
    }
}
