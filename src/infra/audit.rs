//! Audit log sink.
//!
//! The record writer reports every outcome through an [`AuditLog`] it is
//! handed at construction, so tests can observe the lines without installing
//! a global subscriber.

use crate::config::AUDIT_TARGET;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Leveled sink for human-readable audit lines.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait AuditLog: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards audit lines to `tracing` under the `security` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn info(&self, message: &str) {
        tracing::info!(target: AUDIT_TARGET, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: AUDIT_TARGET, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: AUDIT_TARGET, "{}", message);
    }
}
