//! User service
//!
//! Creates and looks up users by email.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{TallyError, TallyResult};
use crate::models::User;
use crate::storage::Storage;

/// Service for user management
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user; emails are unique ignoring case
    pub fn create(&self, email: &str) -> TallyResult<User> {
        let user = User::new(email);
        user.validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        if self.storage.users.get_by_email(&user.email)?.is_some() {
            return Err(TallyError::Duplicate {
                entity_type: "User",
                identifier: user.email,
            });
        }

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        self.storage.log_create(
            EntityType::User,
            user.id.to_string(),
            Some(user.email.clone()),
            &user,
        )?;
        info!(user = %user.id, "created user");

        Ok(user)
    }

    pub fn find_by_email(&self, email: &str) -> TallyResult<Option<User>> {
        self.storage.users.get_by_email(email)
    }

    /// Look up a user by email, failing if none exists
    pub fn require(&self, email: &str) -> TallyResult<User> {
        self.find_by_email(email)?
            .ok_or_else(|| TallyError::user_not_found(email.trim()))
    }

    /// Active users ordered by email
    pub fn list(&self) -> TallyResult<Vec<User>> {
        let mut users = self.storage.users.get_all()?;
        users.retain(|u| u.active);
        Ok(users)
    }
}
