//! Category model
//!
//! Categories belong to a single user and tag transactions. A transaction
//! without a category resolves to the `Uncategorized` sentinel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, UserId};

/// Name shown for transactions that carry no category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Maximum category name length
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

/// A transaction category owned by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Owning user
    pub user_id: UserId,

    /// Category name
    pub name: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            user_id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if name.len() > MAX_CATEGORY_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(name.len()));
        }

        if name.eq_ignore_ascii_case(UNCATEGORIZED) {
            return Err(CategoryValidationError::Reserved);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Resolve the display name of an optional category
pub fn category_name(category: Option<&Category>) -> &str {
    category.map(|c| c.name.as_str()).unwrap_or(UNCATEGORIZED)
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    Reserved,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Category name too long ({} chars, max {})",
                len, MAX_CATEGORY_NAME_LEN
            ),
            Self::Reserved => write!(f, "'{}' is reserved", UNCATEGORIZED),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
