//! Where reports get their transactions from

use crate::error::TallyResult;
use crate::models::{Transaction, UserId};

/// Provides the transactions belonging to a user
///
/// The report calculators only read through this trait, so they run the same
/// against the JSON store and against an in-memory list.
pub trait TransactionSource {
    fn transactions_for_user(&self, user_id: UserId) -> TallyResult<Vec<Transaction>>;
}

impl TransactionSource for [Transaction] {
    fn transactions_for_user(&self, user_id: UserId) -> TallyResult<Vec<Transaction>> {
        Ok(self
            .iter()
            .filter(|txn| txn.user_id == user_id)
            .cloned()
            .collect())
    }
}

impl TransactionSource for Vec<Transaction> {
    fn transactions_for_user(&self, user_id: UserId) -> TallyResult<Vec<Transaction>> {
        self.as_slice().transactions_for_user(user_id)
    }
}
