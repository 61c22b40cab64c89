//! Expense service
//!
//! Create, list, find and delete expenses. Expenses are never edited in
//! place; a correction is a delete followed by a create.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, ExpenseId, Money, MonthCursor, PaymentType};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub date: NaiveDate,
    pub description: String,
    pub category: Option<Category>,
    pub payment_type: PaymentType,
    pub value: Money,
}

/// Options for filtering expense listings
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub month: Option<MonthCursor>,
    pub payment_type: Option<PaymentType>,
    pub category: Option<Category>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: MonthCursor) -> Self {
        self.month = Some(month);
        self
    }

    pub fn payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = Some(payment_type);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    fn accepts(&self, expense: &Expense) -> bool {
        self.month.map_or(true, |m| m.contains(expense.date))
            && self.payment_type.map_or(true, |p| expense.payment_type == p)
            && self.category.map_or(true, |c| expense.category == Some(c))
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense and persist the collection
    pub fn create(&self, input: CreateExpenseInput) -> TrackerResult<Expense> {
        let expense = Expense::new(
            input.date,
            input.description.trim(),
            input.category,
            input.payment_type,
            input.value,
        );

        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.expenses.insert(expense.clone())?;

        if let Err(e) = self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        ) {
            tracing::warn!(error = %e, expense_id = %expense.id, "audit entry not written");
        }

        tracing::info!(
            expense_id = %expense.id,
            value = expense.value.cents(),
            payment_type = %expense.payment_type,
            "expense created"
        );

        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by full or short ID
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<Expense>> {
        self.storage.expenses.find(identifier)
    }

    /// All expenses in insertion order
    pub fn list_all(&self) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Expenses accepted by the filter, in insertion order
    pub fn list(&self, filter: &ExpenseFilter) -> TrackerResult<Vec<Expense>> {
        let mut expenses = self.storage.expenses.get_all()?;
        expenses.retain(|e| filter.accepts(e));
        Ok(expenses)
    }

    /// Delete an expense by ID
    ///
    /// Returns the removed expense, or `None` if no expense had that ID.
    pub fn delete(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        let Some(expense) = self.storage.expenses.delete(id)? else {
            tracing::debug!(expense_id = %id, "delete ignored, expense not found");
            return Ok(None);
        };

        if let Err(e) = self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        ) {
            tracing::warn!(error = %e, expense_id = %expense.id, "audit entry not written");
        }

        tracing::info!(expense_id = %expense.id, "expense deleted");
        Ok(Some(expense))
    }

    /// Delete an expense by full or short ID, failing if none matches
    pub fn delete_by_identifier(&self, identifier: &str) -> TrackerResult<Expense> {
        let expense = self
            .find(identifier)?
            .ok_or_else(|| TrackerError::expense_not_found(identifier))?;

        self.delete(expense.id)?
            .ok_or_else(|| TrackerError::expense_not_found(identifier))
    }

    /// Count expenses
    pub fn count(&self) -> TrackerResult<usize> {
        self.storage.expenses.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::TrackerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(date: &str, description: &str, cents: i64, payment_type: PaymentType) -> CreateExpenseInput {
        CreateExpenseInput {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: description.into(),
            category: None,
            payment_type,
            value: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_create_persists_and_audits() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .create(input("2025-01-10", "  Market ", 5000, PaymentType::InstantTransfer))
            .unwrap();
        assert_eq!(expense.description, "Market");

        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.expenses.get(expense.id).unwrap(), Some(expense));

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].operation, Operation::Create);
    }

    #[test]
    fn test_create_rejects_invalid() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .create(input("2025-01-10", " ", 5000, PaymentType::Debit))
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .create(input("2025-01-10", "Refund", -100, PaymentType::Debit))
            .unwrap_err();
        assert!(err.is_validation());

        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let expense = service
            .create(input("2025-01-10", "Taxi", 3000, PaymentType::Credit))
            .unwrap();

        assert!(service.delete(expense.id).unwrap().is_some());
        assert!(service.delete(expense.id).unwrap().is_none());
        assert_eq!(service.count().unwrap(), 0);
        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_by_identifier() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let expense = service
            .create(input("2025-01-10", "Taxi", 3000, PaymentType::Credit))
            .unwrap();

        let removed = service
            .delete_by_identifier(&expense.id.to_string())
            .unwrap();
        assert_eq!(removed.id, expense.id);

        let err = service.delete_by_identifier("exp-00000000").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_with_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.create(input("2025-01-10", "A", 100, PaymentType::Debit)).unwrap();
        service.create(input("2025-02-10", "B", 200, PaymentType::Debit)).unwrap();
        service.create(input("2025-01-20", "C", 300, PaymentType::Credit)).unwrap();

        let jan = MonthCursor::parse("2025-01").unwrap();
        let names: Vec<_> = service
            .list(&ExpenseFilter::new().month(jan))
            .unwrap()
            .into_iter()
            .map(|e| e.description)
            .collect();
        assert_eq!(names, ["A", "C"]);

        let debit = service
            .list(&ExpenseFilter::new().payment_type(PaymentType::Debit))
            .unwrap();
        assert_eq!(debit.len(), 2);
    }

    #[test]
    fn test_failed_save_is_not_recorded() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let kept = service
            .create(input("2025-01-10", "Taxi", 3000, PaymentType::Credit))
            .unwrap();

        let path = storage.paths().expenses_file();
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let err = service
            .create(input("2025-01-11", "Bus", 450, PaymentType::Debit))
            .unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
        assert!(service.delete(kept.id).is_err());

        assert_eq!(service.list_all().unwrap(), vec![kept]);
        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }
}
