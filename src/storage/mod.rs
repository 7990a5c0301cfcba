//! Storage layer for Tally
//!
//! JSON file storage with atomic writes, one repository per entity, and
//! an append-only audit log.

pub mod categories;
pub mod file_io;
pub mod transactions;
pub mod users;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;
pub use users::UserRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TallyPaths;
use crate::error::TallyError;

/// Map a poisoned lock into a storage error
pub(crate) fn lock_error<E: std::fmt::Display>(e: E) -> TallyError {
    TallyError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TallyPaths,
    pub users: UserRepository,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &TallyPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TallyError> {
        self.users.load()?;
        self.categories.load()?;
        self.transactions.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TallyError> {
        self.users.save()?;
        self.categories.save()?;
        self.transactions.save()?;
        Ok(())
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), TallyError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), TallyError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
