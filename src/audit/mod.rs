//! Audit logging for fintrack
//!
//! Every create and delete of an expense or calendar event is appended to
//! `audit.log` as one JSON line, so the history survives even though the
//! collections themselves are rewritten in full on each change.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
