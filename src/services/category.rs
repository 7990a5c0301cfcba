//! Category service
//!
//! Categories are scoped to a user; names are unique per user ignoring case.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{TallyError, TallyResult};
use crate::models::{Category, UserId};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a category for a user
    pub fn create(&self, user_id: UserId, name: &str) -> TallyResult<Category> {
        self.storage
            .users
            .get(user_id)?
            .ok_or_else(|| TallyError::user_not_found(user_id.to_string()))?;

        let category = Category::new(user_id, name.trim());
        category
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        if self
            .storage
            .categories
            .get_by_name(user_id, &category.name)?
            .is_some()
        {
            return Err(TallyError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;
        info!(category = %category.id, user = %user_id, "created category");

        Ok(category)
    }

    /// Find one of a user's categories by name
    pub fn find(&self, user_id: UserId, name: &str) -> TallyResult<Option<Category>> {
        self.storage.categories.get_by_name(user_id, name)
    }

    /// A user's categories ordered by name
    pub fn list(&self, user_id: UserId) -> TallyResult<Vec<Category>> {
        self.storage.categories.get_by_user(user_id)
    }
}
