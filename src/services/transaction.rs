//! Transaction service
//!
//! Provides business logic for transaction management: creation with sign
//! normalization and ownership checks, paged listing, and deletion.

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::info;

use crate::audit::EntityType;
use crate::error::{TallyError, TallyResult};
use crate::models::{CategoryId, Money, Transaction, UserId};
use crate::storage::Storage;

use super::pagination::Page;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub user_id: UserId,
    pub description: String,
    /// Magnitude; the stored sign follows `is_debit`
    pub amount: Money,
    pub is_debit: bool,
    /// Defaults to the current local date and time
    pub date: Option<NaiveDateTime>,
    pub category_id: Option<CategoryId>,
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y"];

/// Parse a user-supplied transaction date.
///
/// Blank input yields `now`. A date without a time-of-day takes the
/// time-of-day of `now`.
pub fn parse_transaction_date(input: &str, now: NaiveDateTime) -> TallyResult<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(now);
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date.and_time(now.time()));
        }
    }

    Err(TallyError::Validation(format!(
        "Invalid date '{}': expected YYYY-MM-DD or DD Mon YYYY, optionally followed by HH:MM[:SS]",
        input
    )))
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> TallyResult<Transaction> {
        self.storage
            .users
            .get(input.user_id)?
            .ok_or_else(|| TallyError::user_not_found(input.user_id.to_string()))?;

        // A category must belong to the same user
        if let Some(cat_id) = input.category_id {
            match self.storage.categories.get(cat_id)? {
                Some(category) if category.user_id == input.user_id => {}
                _ => return Err(TallyError::category_not_found(cat_id.to_string())),
            }
        }

        let date = input
            .date
            .unwrap_or_else(|| Local::now().naive_local());

        let mut txn = Transaction::new(
            input.user_id,
            input.description.trim(),
            date,
            input.amount,
            input.is_debit,
        );
        txn.category_id = input.category_id;

        txn.validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        )?;
        info!(transaction = %txn.id, user = %txn.user_id, amount = %txn.amount, "created transaction");

        Ok(txn)
    }

    /// Find a transaction by full UUID or short ID
    pub fn find(&self, identifier: &str) -> TallyResult<Option<Transaction>> {
        self.storage.transactions.find(identifier)
    }

    /// A user's transactions, newest first
    pub fn list_for_user(&self, user_id: UserId) -> TallyResult<Vec<Transaction>> {
        self.storage.transactions.get_by_user(user_id)
    }

    /// One page of a user's transactions, newest first
    pub fn list_page(
        &self,
        user_id: UserId,
        page: usize,
        per_page: usize,
    ) -> TallyResult<Page<Transaction>> {
        let transactions = self.list_for_user(user_id)?;
        Ok(Page::from_items(transactions, page, per_page))
    }

    /// Delete a transaction
    pub fn delete(&self, identifier: &str) -> TallyResult<Transaction> {
        let txn = self
            .find(identifier)?
            .ok_or_else(|| TallyError::transaction_not_found(identifier))?;

        self.storage.transactions.delete(txn.id)?;
        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        )?;
        info!(transaction = %txn.id, user = %txn.user_id, "deleted transaction");

        Ok(txn)
    }
}
