//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{Category, CategoryId, UserId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: CategoryData = read_json(&self.path)?;
        let mut categories = self.categories.write().map_err(lock_error)?;

        categories.clear();
        for category in file_data.categories {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), TallyError> {
        let categories = self.categories.read().map_err(lock_error)?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by(|a, b| a.user_id.cmp(&b.user_id).then(a.name.cmp(&b.name)));

        write_json_atomic(&self.path, &CategoryData { categories: list })
    }

    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, TallyError> {
        let categories = self.categories.read().map_err(lock_error)?;
        Ok(categories.get(&id).cloned())
    }

    /// A user's categories ordered by name
    pub fn get_by_user(&self, user_id: UserId) -> Result<Vec<Category>, TallyError> {
        let categories = self.categories.read().map_err(lock_error)?;
        let mut list: Vec<_> = categories
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(list)
    }

    /// Find one of a user's categories by name (case-insensitive)
    pub fn get_by_name(&self, user_id: UserId, name: &str) -> Result<Option<Category>, TallyError> {
        let categories = self.categories.read().map_err(lock_error)?;
        let name = name.trim();
        Ok(categories
            .values()
            .find(|c| c.user_id == user_id && c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Lookup table of category names by ID
    pub fn names(&self) -> Result<HashMap<CategoryId, String>, TallyError> {
        let categories = self.categories.read().map_err(lock_error)?;
        Ok(categories
            .values()
            .map(|c| (c.id, c.name.clone()))
            .collect())
    }

    pub fn upsert(&self, category: Category) -> Result<(), TallyError> {
        let mut categories = self.categories.write().map_err(lock_error)?;
        categories.insert(category.id, category);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_categories_are_per_user() {
        let (_temp_dir, repo) = create_test_repo();
        let ann = UserId::new();
        let bob = UserId::new();

        repo.upsert(Category::new(ann, "Rent")).unwrap();
        repo.upsert(Category::new(ann, "groceries")).unwrap();
        repo.upsert(Category::new(bob, "Rent")).unwrap();

        let names: Vec<String> = repo.get_by_user(ann).unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["groceries", "Rent"]);
        assert!(repo.get_by_name(bob, "rent").unwrap().is_some());
        assert!(repo.get_by_name(bob, "groceries").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let category = Category::new(UserId::new(), "income");
        repo.upsert(category.clone()).unwrap();
        repo.save().unwrap();

        let reloaded = CategoryRepository::new(temp_dir.path().join("categories.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(category.id).unwrap().unwrap().name, "income");
        assert_eq!(reloaded.names().unwrap().len(), 1);
    }
}
