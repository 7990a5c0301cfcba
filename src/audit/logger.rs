//! Append-only audit log writer
//!
//! One JSON document per line. Each entry goes to disk in a single write.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::error::{TallyError, TallyResult};

use super::entry::AuditEntry;

/// Reads and appends entries of the JSONL audit log
pub struct AuditLogger {
    path: PathBuf,
}

fn audit_io_error(action: &str, e: std::io::Error) -> TallyError {
    TallyError::Io(format!("Failed to {} audit log: {}", action, e))
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append an entry as one line
    pub fn log(&self, entry: &AuditEntry) -> TallyResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(&line))
            .map_err(|e| audit_io_error("append to", e))
    }

    /// Every entry, oldest first. A missing log reads as empty.
    pub fn read_all(&self) -> TallyResult<Vec<AuditEntry>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(audit_io_error("read", e)),
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    TallyError::Json(format!("Bad audit entry on line {}: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TallyResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }
}
