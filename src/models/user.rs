//! User model
//!
//! Every transaction and category is owned by exactly one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A person tracking their finances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    /// Login email, unique ignoring case
    pub email: String,

    /// Inactive users are kept but hidden from listings
    #[serde(default = "default_active")]
    pub active: bool,

    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            email: email.into().trim().to_lowercase(),
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Validate the user
    pub fn validate(&self) -> Result<(), UserValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }

        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(UserValidationError::InvalidEmail(email.to_string())),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyEmail,
    InvalidEmail(String),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "Email cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for UserValidationError {}
