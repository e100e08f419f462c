//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `seed` - Insert the demo accounts and the injection probe
//! - `add` - Add a single user record
//! - `check` - Run a value through the sanitizer

pub mod args;

pub use args::{Cli, Commands};
