//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for per-user expense ledgers.
///
/// The browser application keeps one serialized expense array per username in
/// local storage; this trait generalizes that to any backend. Each mutation in
/// the managers is a load-then-save pass treated as a single logical step.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Load the full expense history for a user, newest first.
    ///
    /// An unknown user simply has an empty ledger; this is not an error.
    async fn load_expenses(&self, username: &str) -> SplitResult<Vec<Expense>>;

    /// Replace the stored expense list for a user
    async fn save_expenses(&mut self, username: &str, expenses: &[Expense]) -> SplitResult<()>;
}

/// Storage abstraction for the mock user table
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user record
    async fn save_user(&mut self, user: &User) -> SplitResult<()>;

    /// Look up a user by exact username
    async fn find_user(&self, username: &str) -> SplitResult<Option<User>>;

    /// Look up a user matching either the username or the email address.
    ///
    /// Registration uses this to reject duplicates on both keys.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> SplitResult<Option<User>>;
}

/// Trait for implementing custom expense admission rules
pub trait ExpenseValidator: Send + Sync {
    /// Validate an expense before it is admitted to a ledger
    fn validate_expense(&self, expense: &Expense) -> SplitResult<()>;
}

/// Default expense validator enforcing the core data-model invariants
pub struct DefaultExpenseValidator;

impl ExpenseValidator for DefaultExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> SplitResult<()> {
        expense.validate()
    }
}
