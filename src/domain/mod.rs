//! Domain layer - Core business entities and logic
//!
//! Contains the credential record, the rejection event produced when a
//! candidate fails validation, and the input sanitizer.

pub mod credential;
pub mod sanitizer;

pub use credential::{Credential, Rejection};
pub use sanitizer::{is_valid_input, is_valid_str};
