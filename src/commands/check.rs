//! Check command - Runs a value through the sanitizer.

use crate::cli::args::CheckArgs;
use crate::domain::is_valid_input;
use crate::errors::AppResult;

use super::parse_value;

/// Execute the check command
pub async fn execute(args: CheckArgs) -> AppResult<()> {
    let value = parse_value(&args.value, args.json);
    let verdict = if is_valid_input(&value) {
        "valid"
    } else {
        "rejected"
    };

    tracing::debug!(%value, verdict, "Sanitizer check");
    println!("{}: {}", args.value, verdict);

    Ok(())
}
