//! Seed command - Inserts the demo accounts and the injection probe.

use serde_json::json;

use crate::cli::args::SeedArgs;
use crate::config::{Config, PROBE_USERNAME, SEED_USERS};
use crate::errors::AppResult;
use crate::services::RecordWriter;

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    tracing::info!("Seeding collection {}...", config.collection_name);

    let writer = super::open_writer(&config, args.dry_run).await?;
    seed(&writer).await;

    Ok(())
}

/// Add every seed account, then attempt the operator-injection probe.
pub async fn seed(writer: &RecordWriter) {
    for (username, password) in SEED_USERS {
        writer.add_str_record(username, password).await;
    }

    writer.add_record(&json!(PROBE_USERNAME), &json!({ "$gt": "" })).await;
}
