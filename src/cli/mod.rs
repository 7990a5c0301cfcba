//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod category;
pub mod report;
pub mod transaction;
pub mod user;

pub use audit::{handle_audit_command, AuditArgs};
pub use category::{handle_category_command, CategoryCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use user::{handle_user_command, UserCommands};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{TallyError, TallyResult};

/// Open `path` for a CSV export
fn create_output_file(path: &Path) -> TallyResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        TallyError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
