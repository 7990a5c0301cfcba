//! Export module for Tally
//!
//! CSV export of transaction lists. Report tables export themselves through
//! `ReportTable::export_csv`.

pub mod csv;

pub use self::csv::{export_transactions_csv, export_user_transactions_csv, TRANSACTION_CSV_HEADER};
