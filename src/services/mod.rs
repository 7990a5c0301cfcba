//! Service layer for Tally
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, ownership checks and audit logging.

pub mod category;
pub mod pagination;
pub mod transaction;
pub mod user;

pub use category::CategoryService;
pub use pagination::Page;
pub use transaction::{parse_transaction_date, CreateTransactionInput, TransactionService};
pub use user::UserService;
