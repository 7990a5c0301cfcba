//! Core data models for Tally
//!
//! This module contains the data structures that represent the finance
//! domain: users, categories, transactions and money amounts.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;

pub use category::{category_name, Category, UNCATEGORIZED};
pub use ids::{CategoryId, TransactionId, UserId};
pub use money::Money;
pub use transaction::Transaction;
pub use user::User;
