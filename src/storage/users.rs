//! User repository for JSON storage
//!
//! Manages loading and saving users to users.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, User>>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: UserData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_error)?;

        data.clear();
        for user in file_data.users {
            data.insert(user.id, user);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), TallyError> {
        let users = self.get_all()?;
        write_json_atomic(&self.path, &UserData { users })
    }

    pub fn get(&self, id: UserId) -> Result<Option<User>, TallyError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Find a user by email (case-insensitive)
    pub fn get_by_email(&self, email: &str) -> Result<Option<User>, TallyError> {
        let data = self.data.read().map_err(lock_error)?;
        let email = email.trim();
        Ok(data
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    /// All users ordered by email
    pub fn get_all(&self) -> Result<Vec<User>, TallyError> {
        let data = self.data.read().map_err(lock_error)?;
        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }

    pub fn upsert(&self, user: User) -> Result<(), TallyError> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(user.id, user);
        Ok(())
    }
}
