//! Display formatting for terminal output
//!
//! Renders users, categories, audit entries, transaction registers and
//! report tables as text for the CLI.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{format_audit_log, format_category_list, format_user_list};
pub use report::{format_report_table, truncate};
pub use transaction::{format_transaction_details, format_transaction_register};
