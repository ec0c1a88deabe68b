//! Rules command - lists the active rule requirements.

use crate::domain::Rule;
use crate::errors::AppResult;

/// Execute the rules command
pub fn execute() -> AppResult<()> {
    tracing::debug!("Listing active rules");

    for rule in Rule::default_set() {
        println!("{}", rule.error_message());
    }

    Ok(())
}
