//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. Insertion order is
//! preserved; the expense table and the monthly totals both depend on it.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk, replacing anything held in memory
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: ExpenseData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_error)?;

        tracing::debug!(count = file_data.expenses.len(), "loaded expenses");
        *data = file_data.expenses;
        Ok(())
    }

    /// Save the full collection to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self.data.read().map_err(lock_error)?;

        let file_data = ExpenseData {
            expenses: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.clone())
    }

    /// Find the first expense whose ID matches a user-supplied identifier
    pub fn find(&self, identifier: &str) -> Result<Option<Expense>, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.iter().find(|e| e.id.matches(identifier)).cloned())
    }

    /// Append an expense and write the collection
    ///
    /// Memory only changes once the file has been replaced, so a failed
    /// write leaves both sides as they were.
    pub fn insert(&self, expense: Expense) -> Result<(), TrackerError> {
        let mut data = self.data.write().map_err(lock_error)?;

        let mut file_data = ExpenseData {
            expenses: data.clone(),
        };
        file_data.expenses.push(expense);
        write_json_atomic(&self.path, &file_data)?;

        *data = file_data.expenses;
        Ok(())
    }

    /// Remove an expense and write the collection
    ///
    /// Returns `None` without touching the file when the ID is unknown.
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        let mut data = self.data.write().map_err(lock_error)?;

        let Some(index) = data.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        let mut file_data = ExpenseData {
            expenses: data.clone(),
        };
        let removed = file_data.expenses.remove(index);
        write_json_atomic(&self.path, &file_data)?;

        *data = file_data.expenses;
        Ok(Some(removed))
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, PaymentType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn expense(description: &str, cents: i64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            description,
            Some(Category::Food),
            PaymentType::Debit,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let e = expense("Lunch", 2500);
        let id = e.id;

        repo.insert(e).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.value.cents(), 2500);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (_temp_dir, repo) = create_test_repo();
        for name in ["first", "second", "third"] {
            repo.insert(expense(name, 100)).unwrap();
        }

        let names: Vec<_> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|e| e.description)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let first = expense("Bus", 450);
        let second = expense("Book", 3990);
        repo.insert(first.clone()).unwrap();
        repo.insert(second.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.get_all().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_delete_keeps_order_of_others() {
        let (_temp_dir, repo) = create_test_repo();
        let a = expense("a", 1);
        let b = expense("b", 2);
        let c = expense("c", 3);
        let b_id = b.id;
        for e in [a.clone(), b, c.clone()] {
            repo.insert(e).unwrap();
        }

        let removed = repo.delete(b_id).unwrap();
        assert_eq!(removed.map(|e| e.description), Some("b".to_string()));
        assert_eq!(repo.get_all().unwrap(), vec![a, c]);

        assert!(repo.delete(b_id).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_find_by_short_id() {
        let (_temp_dir, repo) = create_test_repo();
        let e = expense("Taxi", 3000);
        let short = e.id.to_string();
        repo.insert(e.clone()).unwrap();

        assert_eq!(repo.find(&short).unwrap(), Some(e));
        assert_eq!(repo.find("exp-zzzzzzzz").unwrap(), None);
    }

    #[test]
    fn test_failed_write_leaves_collection_unchanged() {
        let (temp_dir, repo) = create_test_repo();
        let kept = expense("Kept", 100);
        let kept_id = kept.id;
        repo.insert(kept.clone()).unwrap();

        // A directory where the record belongs makes every write fail
        let path = temp_dir.path().join("expenses.json");
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(repo.insert(expense("Lost", 200)).is_err());
        assert!(repo.delete(kept_id).is_err());
        assert_eq!(repo.get_all().unwrap(), vec![kept]);
    }
}
