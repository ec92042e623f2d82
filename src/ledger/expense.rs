//! Expense record management

use chrono::NaiveDateTime;

use crate::traits::*;
use crate::types::*;

/// Expense manager for a per-user ledger.
///
/// Each mutation loads the user's list, applies the change, and writes the
/// whole list back; the store treats that as one logical step.
pub struct ExpenseManager<S: ExpenseStore> {
    storage: S,
    validator: Box<dyn ExpenseValidator>,
}

impl<S: ExpenseStore> ExpenseManager<S> {
    /// Create a new expense manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultExpenseValidator),
        }
    }

    /// Create a new expense manager with a custom validator
    pub fn with_validator(storage: S, validator: Box<dyn ExpenseValidator>) -> Self {
        Self { storage, validator }
    }

    /// Admit a new expense to the user's ledger.
    ///
    /// The expense is validated first and prepended, so the list stays
    /// newest-first.
    pub async fn add_expense(&mut self, username: &str, expense: Expense) -> SplitResult<Expense> {
        self.validator.validate_expense(&expense)?;

        let mut expenses = self.storage.load_expenses(username).await?;
        expenses.insert(0, expense.clone());
        self.storage.save_expenses(username, &expenses).await?;

        Ok(expense)
    }

    /// Mark an expense as settled; it stays in history but stops counting
    /// toward balances
    pub async fn mark_paid(&mut self, username: &str, expense_id: &str) -> SplitResult<()> {
        let mut expenses = self.storage.load_expenses(username).await?;

        let expense = expenses
            .iter_mut()
            .find(|e| e.id == expense_id)
            .ok_or_else(|| SplitError::ExpenseNotFound(expense_id.to_string()))?;
        expense.is_paid = true;

        self.storage.save_expenses(username, &expenses).await
    }

    /// Remove an expense from the user's ledger entirely
    pub async fn delete_expense(&mut self, username: &str, expense_id: &str) -> SplitResult<()> {
        let mut expenses = self.storage.load_expenses(username).await?;

        let before = expenses.len();
        expenses.retain(|e| e.id != expense_id);
        if expenses.len() == before {
            return Err(SplitError::ExpenseNotFound(expense_id.to_string()));
        }

        self.storage.save_expenses(username, &expenses).await
    }

    /// Full expense history for a user, settled records included
    pub async fn list_expenses(&self, username: &str) -> SplitResult<Vec<Expense>> {
        self.storage.load_expenses(username).await
    }
}

/// Builder for assembling expenses the way the entry form does.
///
/// Fills in the generated id, unpaid state, and creation timestamp; the
/// occurrence date defaults to creation time unless set explicitly.
#[derive(Debug)]
pub struct ExpenseBuilder {
    expense: Expense,
}

impl ExpenseBuilder {
    /// Start a new expense with the payer as its only participant
    pub fn new(description: impl Into<String>, amount: f64, paid_by: impl Into<String>) -> Self {
        let paid_by = paid_by.into();
        Self {
            expense: Expense::new(
                description.into(),
                amount,
                crate::currency::DEFAULT_CURRENCY.to_string(),
                paid_by.clone(),
                vec![paid_by],
            ),
        }
    }

    /// Set the currency code
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.expense.currency = currency.into();
        self
    }

    /// Add a participant to the split set, ignoring duplicates
    pub fn split_with(mut self, participant: impl Into<String>) -> Self {
        let participant = participant.into();
        if !self.expense.is_split_with(&participant) {
            self.expense.split_among.push(participant);
        }
        self
    }

    /// Replace the split set outright
    pub fn split_among(mut self, participants: Vec<String>) -> Self {
        self.expense.split_among = participants;
        self
    }

    /// Set the date the expense occurred
    pub fn date(mut self, date: NaiveDateTime) -> Self {
        self.expense.date = date;
        self
    }

    /// Validate and produce the expense
    pub fn build(self) -> SplitResult<Expense> {
        self.expense.validate()?;
        Ok(self.expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_storage::MemoryStorage;

    fn lunch(amount: f64) -> Expense {
        ExpenseBuilder::new("Lunch", amount, "Alice")
            .split_with("Bob")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let expense = ExpenseBuilder::new("Coffee", 4.5, "Alice").build().unwrap();
        assert_eq!(expense.currency, "USD");
        assert_eq!(expense.split_among, vec!["Alice".to_string()]);
        assert!(!expense.is_paid);
        assert_eq!(expense.date, expense.created_at);
    }

    #[test]
    fn test_builder_ignores_duplicate_participants() {
        let expense = ExpenseBuilder::new("Coffee", 4.5, "Alice")
            .split_with("Bob")
            .split_with("Bob")
            .build()
            .unwrap();
        assert_eq!(expense.split_among.len(), 2);
    }

    #[test]
    fn test_builder_rejects_invalid_expense() {
        let result = ExpenseBuilder::new("Coffee", -1.0, "Alice").build();
        assert!(result.is_err());

        let result = ExpenseBuilder::new("Coffee", 4.5, "Alice")
            .split_among(Vec::new())
            .build();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_add_and_list_newest_first() {
        let storage = MemoryStorage::new();
        let mut manager = ExpenseManager::new(storage);

        let first = manager.add_expense("alice", lunch(20.0)).await.unwrap();
        let second = manager.add_expense("alice", lunch(35.0)).await.unwrap();

        let listed = manager.list_expenses("alice").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_expense() {
        let storage = MemoryStorage::new();
        let mut manager = ExpenseManager::new(storage);

        let mut bad = lunch(20.0);
        bad.amount = 0.0;
        assert!(manager.add_expense("alice", bad).await.is_err());
        assert!(manager.list_expenses("alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mark_paid() {
        let storage = MemoryStorage::new();
        let mut manager = ExpenseManager::new(storage);

        let expense = manager.add_expense("alice", lunch(20.0)).await.unwrap();
        manager.mark_paid("alice", &expense.id).await.unwrap();

        let listed = manager.list_expenses("alice").await.unwrap();
        assert!(listed[0].is_paid);
    }

    #[tokio::test]
    async fn test_mark_paid_unknown_id() {
        let storage = MemoryStorage::new();
        let mut manager = ExpenseManager::new(storage);

        let result = manager.mark_paid("alice", "missing").await;
        assert!(matches!(result, Err(SplitError::ExpenseNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_expense() {
        let storage = MemoryStorage::new();
        let mut manager = ExpenseManager::new(storage);

        let expense = manager.add_expense("alice", lunch(20.0)).await.unwrap();
        manager.delete_expense("alice", &expense.id).await.unwrap();
        assert!(manager.list_expenses("alice").await.unwrap().is_empty());

        let result = manager.delete_expense("alice", &expense.id).await;
        assert!(matches!(result, Err(SplitError::ExpenseNotFound(_))));
    }

    #[tokio::test]
    async fn test_ledgers_are_per_user() {
        let storage = MemoryStorage::new();
        let mut manager = ExpenseManager::new(storage);

        manager.add_expense("alice", lunch(20.0)).await.unwrap();
        assert!(manager.list_expenses("bob").await.unwrap().is_empty());
    }
}
