//! Audit log CLI command

use clap::Args;

use crate::display::format_audit_log;
use crate::error::TallyResult;
use crate::storage::Storage;

/// Options for `tally audit`
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of most recent entries to show
    #[arg(short = 'n', long, default_value_t = 20)]
    limit: usize,
}

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, args: AuditArgs) -> TallyResult<()> {
    let entries = storage.audit().read_recent(args.limit)?;
    print!("{}", format_audit_log(&entries));
    Ok(())
}
