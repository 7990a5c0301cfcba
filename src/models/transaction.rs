//! Transaction model
//!
//! A transaction is either a debit (expense) or a credit (income). The stored
//! amount always carries the sign implied by `is_debit`: debits are negative,
//! credits positive.

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId, UserId};
use super::money::Money;

/// Maximum description length
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Owning user
    pub user_id: UserId,

    /// What the money was for
    pub description: String,

    /// When the transaction happened
    pub date: NaiveDateTime,

    /// Signed amount (positive for credits, negative for debits)
    pub amount: Money,

    /// Whether this is an expense
    pub is_debit: bool,

    /// Category, `None` means uncategorized
    pub category_id: Option<CategoryId>,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with a sign-normalized amount
    pub fn new(
        user_id: UserId,
        description: impl Into<String>,
        date: NaiveDateTime,
        amount: Money,
        is_debit: bool,
    ) -> Self {
        let now = Utc::now();
        let mut txn = Self {
            id: TransactionId::new(),
            user_id,
            description: description.into(),
            date,
            amount,
            is_debit,
            category_id: None,
            created_at: now,
            updated_at: now,
        };
        txn.normalize_sign();
        txn
    }

    /// Create a debit (expense) of the given magnitude
    pub fn debit(
        user_id: UserId,
        description: impl Into<String>,
        date: NaiveDateTime,
        amount: Money,
    ) -> Self {
        Self::new(user_id, description, date, amount, true)
    }

    /// Create a credit (income) of the given magnitude
    pub fn credit(
        user_id: UserId,
        description: impl Into<String>,
        date: NaiveDateTime,
        amount: Money,
    ) -> Self {
        Self::new(user_id, description, date, amount, false)
    }

    /// Force the amount's sign to match `is_debit`
    pub fn normalize_sign(&mut self) {
        let magnitude = self.amount.abs();
        self.amount = if self.is_debit { -magnitude } else { magnitude };
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Check if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(TransactionValidationError::DescriptionTooLong(
                self.description.chars().count(),
            ));
        }

        if self.amount.is_zero() {
            return Err(TransactionValidationError::ZeroAmount);
        }

        if self.is_debit != self.amount.is_negative() {
            return Err(TransactionValidationError::SignMismatch);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    DescriptionTooLong(usize),
    ZeroAmount,
    SignMismatch,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be blank"),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description too long ({} chars, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
            Self::ZeroAmount => write!(f, "Amount must not be zero"),
            Self::SignMismatch => {
                write!(f, "Amount sign does not match the debit/credit flag")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
