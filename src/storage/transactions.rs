//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{Transaction, TransactionId, UserId};
use crate::reports::TransactionSource;

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence with an owner index
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: user_id -> transaction_ids
    by_user: RwLock<HashMap<UserId, Vec<TransactionId>>>,
}

/// Newest first; ties broken by creation time, newest first
fn newest_first(a: &Transaction, b: &Transaction) -> std::cmp::Ordering {
    b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at))
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_user: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and build the owner index
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_user = self.by_user.write().map_err(lock_error)?;

        data.clear();
        by_user.clear();

        for txn in file_data.transactions {
            by_user.entry(txn.user_id).or_default().push(txn.id);
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(newest_first);

        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, TallyError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Find a transaction by full UUID or short display form.
    ///
    /// A short form shared by several transactions is a validation error.
    pub fn find(&self, identifier: &str) -> Result<Option<Transaction>, TallyError> {
        let data = self.data.read().map_err(lock_error)?;
        let mut matches = data.values().filter(|t| t.id.matches(identifier));

        let found = matches.next().cloned();
        let others = matches.count();
        if others > 0 {
            return Err(TallyError::Validation(format!(
                "Ambiguous transaction id '{}': {} transactions match, use the full id",
                identifier.trim(),
                others + 1
            )));
        }
        Ok(found)
    }

    /// A user's transactions, newest first
    pub fn get_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, TallyError> {
        let data = self.data.read().map_err(lock_error)?;
        let by_user = self.by_user.read().map_err(lock_error)?;

        let ids = by_user.get(&user_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        transactions.sort_by(newest_first);
        Ok(transactions)
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), TallyError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_user = self.by_user.write().map_err(lock_error)?;

        if let Some(old) = data.get(&txn.id) {
            if let Some(ids) = by_user.get_mut(&old.user_id) {
                ids.retain(|&id| id != txn.id);
            }
        }

        by_user.entry(txn.user_id).or_default().push(txn.id);
        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction, returning it if it existed
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, TallyError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_user = self.by_user.write().map_err(lock_error)?;

        let removed = data.remove(&id);
        if let Some(txn) = &removed {
            if let Some(ids) = by_user.get_mut(&txn.user_id) {
                ids.retain(|&tid| tid != id);
            }
        }
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize, TallyError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}

impl TransactionSource for TransactionRepository {
    fn transactions_for_user(&self, user_id: UserId) -> Result<Vec<Transaction>, TallyError> {
        self.get_by_user(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn at(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_by_user_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        let user = UserId::new();
        let other = UserId::new();

        repo.upsert(Transaction::credit(user, "Pay", at(2012, 1, 15), Money::from_cents(74560))).unwrap();
        repo.upsert(Transaction::debit(user, "Groceries", at(2012, 1, 22), Money::from_cents(4576))).unwrap();
        repo.upsert(Transaction::debit(user, "Oldest record", at(2012, 1, 31), Money::from_dollars(1))).unwrap();
        repo.upsert(Transaction::debit(other, "Someone else", at(2012, 1, 20), Money::from_dollars(1))).unwrap();

        let descriptions: Vec<String> = repo
            .get_by_user(user)
            .unwrap()
            .into_iter()
            .map(|t| t.description)
            .collect();
        assert_eq!(descriptions, vec!["Oldest record", "Groceries", "Pay"]);
    }

    #[test]
    fn test_upsert_moves_owner_index() {
        let (_temp_dir, repo) = create_test_repo();
        let first = UserId::new();
        let second = UserId::new();

        let mut txn = Transaction::debit(first, "Lunch", at(2012, 2, 1), Money::from_dollars(12));
        repo.upsert(txn.clone()).unwrap();
        txn.user_id = second;
        repo.upsert(txn).unwrap();

        assert!(repo.get_by_user(first).unwrap().is_empty());
        assert_eq!(repo.get_by_user(second).unwrap().len(), 1);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let user = UserId::new();
        let txn = Transaction::debit(user, "Lunch", at(2012, 2, 1), Money::from_dollars(12));
        let id = txn.id;
        repo.upsert(txn).unwrap();

        assert!(repo.delete(id).unwrap().is_some());
        assert!(repo.delete(id).unwrap().is_none());
        assert!(repo.get_by_user(user).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let user = UserId::new();
        let txn = Transaction::debit(user, "Rent", at(2010, 3, 13), Money::from_dollars(100));
        let id = txn.id;
        repo.upsert(txn).unwrap();
        repo.save().unwrap();

        let reloaded = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(id).unwrap().unwrap().amount, Money::from_dollars(-100));
        assert_eq!(reloaded.transactions_for_user(user).unwrap().len(), 1);
        assert!(reloaded.find(&id.to_string()).unwrap().is_some());
    }

    #[test]
    fn test_find_rejects_shared_short_id() {
        let (_temp_dir, repo) = create_test_repo();
        let user = UserId::new();

        let first_uuid = Uuid::parse_str("12345678-0000-4000-8000-000000000001").unwrap();
        let second_uuid = Uuid::parse_str("12345678-0000-4000-8000-000000000002").unwrap();
        for (uuid, description) in [(first_uuid, "Lunch"), (second_uuid, "Dinner")] {
            let mut txn = Transaction::debit(user, description, at(2012, 2, 1), Money::from_dollars(12));
            txn.id = TransactionId::from(uuid);
            repo.upsert(txn).unwrap();
        }

        let err = repo.find("txn-12345678").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Ambiguous"));

        let exact = repo.find(&second_uuid.to_string()).unwrap().unwrap();
        assert_eq!(exact.description, "Dinner");
        assert!(repo.find("txn-87654321").unwrap().is_none());
    }
}
