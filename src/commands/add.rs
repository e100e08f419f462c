//! Add command - Inserts a single user record.

use crate::cli::args::AddArgs;
use crate::config::Config;
use crate::errors::AppResult;

use super::parse_value;

/// Execute the add command
pub async fn execute(args: AddArgs, config: Config) -> AppResult<()> {
    let username = parse_value(&args.username, args.json);
    let password = parse_value(&args.password, args.json);

    let writer = super::open_writer(&config, args.dry_run).await?;
    writer.add_record(&username, &password).await;

    Ok(())
}
