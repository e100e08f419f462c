//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod credential_repository;

pub use credential_repository::{
    CredentialRepository, InMemoryCredentialStore, MongoCredentialStore,
};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use credential_repository::MockCredentialRepository;
