//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - MongoDB connection and collection setup
//! - Credential repositories (MongoDB and in-memory)
//! - Audit log sink and process-wide tracing setup

pub mod audit;
pub mod db;
pub mod logging;
pub mod repositories;

pub use audit::{AuditLog, TracingAuditLog};
pub use db::Database;
pub use logging::init_tracing;
pub use repositories::{CredentialRepository, InMemoryCredentialStore, MongoCredentialStore};

#[cfg(any(test, feature = "test-utils"))]
pub use audit::MockAuditLog;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockCredentialRepository;
