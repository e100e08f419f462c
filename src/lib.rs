//! User Vault - Seeds a MongoDB users collection behind an injection gate
//!
//! Candidate usernames and passwords pass through a narrow sanitizer before
//! they reach the database. Values that are not plain strings, or that contain
//! `$` or `>`, are logged as injection attempts and never written.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Credential record, rejection event, sanitizer
//! - **services**: Record writer
//! - **infra**: MongoDB, repositories, audit log, tracing setup
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Insert the demo accounts and the injection probe
//! cargo run -- seed
//!
//! # Add one record, parsing values as JSON
//! cargo run -- add --username intruder --password '{"$gt": ""}' --json
//!
//! # Check a value without touching the database
//! cargo run -- check 'a$b'
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{is_valid_input, Credential, Rejection};
pub use errors::{AppError, AppResult};
pub use services::RecordWriter;
