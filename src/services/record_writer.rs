//! Record writer - Validates candidate pairs and inserts accepted ones.
//!
//! Every call produces exactly one audit line: info on insert, warning on
//! rejection, error on store failure. Store failures never reach the caller.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::Credential;
use crate::infra::{AuditLog, CredentialRepository};

/// Writes user records through an injected store and audit log.
pub struct RecordWriter {
    store: Arc<dyn CredentialRepository>,
    audit: Arc<dyn AuditLog>,
}

impl RecordWriter {
    /// Create new writer over the given store and audit sink
    pub fn new(store: Arc<dyn CredentialRepository>, audit: Arc<dyn AuditLog>) -> Self {
        Self { store, audit }
    }

    /// Validate and insert one username/password pair.
    ///
    /// Performs at most one insert. A rejected pair is logged with both raw
    /// values and discarded; a failed insert is logged and swallowed.
    pub async fn add_record(&self, username: &Value, password: &Value) {
        let credential = match Credential::validate(username, password) {
            Ok(credential) => credential,
            Err(rejection) => {
                self.audit.warn(&rejection.to_string());
                return;
            }
        };

        match self.store.insert(&credential).await {
            Ok(()) => self
                .audit
                .info(&format!("User {} added successfully", credential.username)),
            Err(e) => self.audit.error(&format!("Failed to add user: {}", e)),
        }
    }

    /// Convenience for callers holding plain strings.
    pub async fn add_str_record(&self, username: &str, password: &str) {
        self.add_record(&Value::from(username), &Value::from(password)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::{MockAuditLog, MockCredentialRepository};
    use serde_json::json;

    fn writer(repo: MockCredentialRepository, audit: MockAuditLog) -> RecordWriter {
        RecordWriter::new(Arc::new(repo), Arc::new(audit))
    }

    #[tokio::test]
    async fn test_valid_pair_inserted_once() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_insert()
            .withf(|c| c.username == "user1" && c.password == "anotherpassword")
            .times(1)
            .returning(|_| Ok(()));

        let mut audit = MockAuditLog::new();
        audit
            .expect_info()
            .withf(|message| message == "User user1 added successfully")
            .times(1)
            .return_const(());
        audit.expect_warn().never();
        audit.expect_error().never();

        writer(repo, audit)
            .add_record(&json!("user1"), &json!("anotherpassword"))
            .await;
    }

    #[tokio::test]
    async fn test_operator_secret_rejected_without_insert() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_insert().never();

        let mut audit = MockAuditLog::new();
        audit
            .expect_warn()
            .withf(|message| message.contains("intruder") && message.contains(r#"{"$gt":""}"#))
            .times(1)
            .return_const(());
        audit.expect_info().never();
        audit.expect_error().never();

        writer(repo, audit)
            .add_record(&json!("intruder"), &json!({"$gt": ""}))
            .await;
    }

    #[tokio::test]
    async fn test_forbidden_username_rejected() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_insert().never();

        let mut audit = MockAuditLog::new();
        audit
            .expect_warn()
            .withf(|message| message.contains("a>b") && message.contains("pw"))
            .times(1)
            .return_const(());

        writer(repo, audit).add_str_record("a>b", "pw").await;
    }

    #[tokio::test]
    async fn test_store_failure_logged_once_and_swallowed() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("connection reset")));

        let mut audit = MockAuditLog::new();
        audit
            .expect_error()
            .withf(|message| {
                message.starts_with("Failed to add user") && message.contains("connection reset")
            })
            .times(1)
            .return_const(());
        audit.expect_info().never();
        audit.expect_warn().never();

        writer(repo, audit).add_str_record("admin", "securepassword").await;
    }
}
