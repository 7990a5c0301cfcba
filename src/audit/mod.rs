//! Audit logging for Tally
//!
//! Records create and delete operations on users, categories and
//! transactions in an append-only, line-delimited JSON (JSONL) log.
//!
//! - `AuditEntry`: one log line with timestamp, operation, entity
//!   information and the entity's JSON state.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
