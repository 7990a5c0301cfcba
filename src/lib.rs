//! Tally - income and expense tracking with period reports
//!
//! Users record debit and credit transactions, optionally categorized, and
//! get profit/loss or income/expense reports aggregated by month within a
//! year or by year across all time.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Users, categories, transactions and money amounts
//! - `storage`: JSON file storage layer
//! - `audit`: Append-only audit log
//! - `services`: Business logic layer
//! - `reports`: Period aggregation and report tables
//! - `export`: CSV export of transactions
//! - `display`: Terminal formatting
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::Local;
//! use tally::config::paths::TallyPaths;
//! use tally::reports::{calculate_profit_loss, RangeMode};
//! use tally::storage::Storage;
//!
//! let mut storage = Storage::new(TallyPaths::new()?)?;
//! storage.load_all()?;
//! let report = calculate_profit_loss(
//!     &storage.transactions,
//!     RangeMode::Year,
//!     user_id,
//!     Local::now().date_naive(),
//! )?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};
