//! Credential repository implementations.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::Collection;

use crate::domain::Credential;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Credential repository trait for dependency injection.
///
/// Insert-only: records are never updated or deleted.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Insert a single credential document
    async fn insert(&self, credential: &Credential) -> AppResult<()>;
}

/// MongoDB-backed repository
pub struct MongoCredentialStore {
    collection: Collection<Credential>,
}

impl MongoCredentialStore {
    /// Create new repository instance
    pub fn new(collection: Collection<Credential>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl CredentialRepository for MongoCredentialStore {
    async fn insert(&self, credential: &Credential) -> AppResult<()> {
        let result = self.collection.insert_one(credential).await?;
        tracing::debug!(id = %result.inserted_id, "Inserted credential document");
        Ok(())
    }
}

/// In-memory repository used for dry runs and tests.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    records: Mutex<Vec<Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every inserted record, in insertion order.
    pub fn records(&self) -> Vec<Credential> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialStore {
    async fn insert(&self, credential: &Credential) -> AppResult<()> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(credential.clone());
        Ok(())
    }
}
