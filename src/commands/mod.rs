//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod add;
pub mod check;
pub mod seed;

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{
    CredentialRepository, Database, InMemoryCredentialStore, MongoCredentialStore, TracingAuditLog,
};
use crate::services::RecordWriter;

/// Build a record writer over MongoDB, or over an in-memory store for dry runs.
pub(crate) async fn open_writer(config: &Config, dry_run: bool) -> AppResult<RecordWriter> {
    let store: Arc<dyn CredentialRepository> = if dry_run {
        tracing::info!("Dry run: records are kept in memory");
        Arc::new(InMemoryCredentialStore::new())
    } else {
        let db = Database::connect(config).await?;
        let collection = db.ensure_collection(&config.collection_name).await?;
        Arc::new(MongoCredentialStore::new(collection))
    };

    Ok(RecordWriter::new(store, Arc::new(TracingAuditLog)))
}

/// Interpret a raw CLI argument, optionally as JSON.
///
/// Unparseable JSON is kept as a plain string so it still reaches the
/// sanitizer verbatim.
pub fn parse_value(raw: &str, json: bool) -> Value {
    if json {
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
    } else {
        Value::String(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value_plain() {
        assert_eq!(parse_value(r#"{"$gt": ""}"#, false), json!(r#"{"$gt": ""}"#));
    }

    #[test]
    fn test_parse_value_json_mapping() {
        assert_eq!(parse_value(r#"{"$gt": ""}"#, true), json!({"$gt": ""}));
    }

    #[test]
    fn test_parse_value_json_fallback() {
        assert_eq!(parse_value("admin", true), json!("admin"));
    }
}
