//! Check command - validates a password and reports every failing rule.

use std::io::{self, BufRead, Write};

use crate::cli::args::CheckArgs;
use crate::config::{MSG_INVALID, MSG_VALID, PROMPT};
use crate::domain::CompositeRule;
use crate::errors::{AppError, AppResult};

/// Execute the check command
pub fn execute(args: CheckArgs) -> AppResult<()> {
    let password = match args.password {
        Some(password) => password,
        None => read_password_line()?,
    };

    let composite = CompositeRule::default_set();
    let report = composite.check(&password);
    tracing::debug!("Password check complete: valid={}", report.valid);

    if args.json {
        let body = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::internal(format!("Report serialization failed: {}", e)))?;
        println!("{}", body);
        return Ok(());
    }

    if report.valid {
        println!("{}", MSG_VALID);
    } else {
        println!("{}", MSG_INVALID);
        for failure in &report.failures {
            println!("{}", failure);
        }
    }

    Ok(())
}

/// Read one line from stdin as the candidate password.
///
/// End of input before any line is read is treated as an empty password
/// and flows through the normal rule pipeline.
fn read_password_line() -> AppResult<String> {
    println!("{}", PROMPT);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        tracing::debug!("End of input before a password line; checking empty password");
    }

    // Drop the line terminator only; no other trimming
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
