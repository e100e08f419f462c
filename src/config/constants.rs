//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Database
// =============================================================================

/// Default MongoDB connection URL (for development)
pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_DATABASE_NAME: &str = "Entrega3";

/// Default collection holding user records
pub const DEFAULT_COLLECTION_NAME: &str = "users";

// =============================================================================
// Logging
// =============================================================================

/// Default security log file, written alongside stdout
pub const DEFAULT_SECURITY_LOG_PATH: &str = "security.log";

/// Tracing target used by the audit log
pub const AUDIT_TARGET: &str = "security";

/// Default filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// Validation
// =============================================================================

/// Substrings that mark a value as a possible query-operator payload.
///
/// `$` prefixes MongoDB operators (`$gt`, `$ne`, `$where`).
pub const FORBIDDEN_SUBSTRINGS: &[&str] = &["$", ">"];

// =============================================================================
// Seed data
// =============================================================================

/// Accounts inserted by the `seed` command
pub const SEED_USERS: &[(&str, &str)] = &[
    ("admin", "securepassword"),
    ("user1", "anotherpassword"),
];

/// Username used for the injection probe in the `seed` command
pub const PROBE_USERNAME: &str = "intruder";
