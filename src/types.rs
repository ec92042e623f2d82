//! Core types and data structures for the bill-splitting system

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::currency;

/// A shared expense fronted by one participant and split equally among others.
///
/// Expenses are immutable once created, apart from the `is_paid` flag which
/// marks an expense as settled. Settled expenses stay in history but are
/// excluded from balance and debt computations.
///
/// Field names serialize in camelCase so a stored ledger matches the JSON
/// shape the browser application persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: String,
    /// Free-text label for the expense
    pub description: String,
    /// Positive amount in `currency` units
    pub amount: f64,
    /// Currency code; a missing or empty code is treated as the default ("USD")
    #[serde(default)]
    pub currency: String,
    /// The participant who fronted the money
    pub paid_by: String,
    /// Participants among whom the amount is divided equally
    pub split_among: Vec<String>,
    /// Whether the expense has been settled
    pub is_paid: bool,
    /// When the expense logically occurred (user-editable)
    pub date: NaiveDateTime,
    /// When the record was created
    pub created_at: NaiveDateTime,
}

impl Expense {
    /// Create a new unpaid expense with a fresh id and current timestamps
    pub fn new(
        description: String,
        amount: f64,
        currency: String,
        paid_by: String,
        split_among: Vec<String>,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description,
            amount,
            currency,
            paid_by,
            split_among,
            is_paid: false,
            date: now,
            created_at: now,
        }
    }

    /// The currency this expense is bucketed under, with the default applied
    pub fn currency_code(&self) -> String {
        currency::normalize(&self.currency)
    }

    /// The equal share each member of `split_among` bears.
    ///
    /// Only meaningful on a validated expense; call [`Expense::validate`]
    /// first so the split set is known to be non-empty.
    pub fn per_person_share(&self) -> f64 {
        self.amount / self.split_among.len() as f64
    }

    /// Whether the given participant appears in the split set
    pub fn is_split_with(&self, participant: &str) -> bool {
        self.split_among.iter().any(|p| p == participant)
    }

    /// Validate the record against the data-model invariants
    pub fn validate(&self) -> SplitResult<()> {
        if self.description.trim().is_empty() {
            return Err(SplitError::InvalidExpense(
                "Expense description cannot be empty".to_string(),
            ));
        }

        if self.amount <= 0.0 || !self.amount.is_finite() {
            return Err(SplitError::InvalidExpense(format!(
                "Expense amount must be positive, got {}",
                self.amount
            )));
        }

        if self.paid_by.trim().is_empty() {
            return Err(SplitError::InvalidExpense(
                "Expense must name who paid".to_string(),
            ));
        }

        if self.split_among.is_empty() {
            return Err(SplitError::InvalidExpense(
                "Expense must be split among at least one participant".to_string(),
            ));
        }

        Ok(())
    }
}

/// Outstanding position for one currency, from the current user's viewpoint.
///
/// Aggregated only over unpaid expenses in that currency. `you_owe` and
/// `you_are_owed` are accumulated independently and are never netted against
/// each other here; both can be non-zero at the same time across different
/// expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyBalance {
    /// Currency code this balance is denominated in
    pub currency: String,
    /// Sum of the current user's unpaid shares of expenses others fronted
    pub you_owe: f64,
    /// Sum owed back to the current user for expenses they fronted
    pub you_are_owed: f64,
    /// Total of all unpaid expenses in this currency, regardless of participation
    pub total: f64,
}

impl CurrencyBalance {
    /// Create an empty balance for a currency
    pub fn new(currency: String) -> Self {
        Self {
            currency,
            you_owe: 0.0,
            you_are_owed: 0.0,
            total: 0.0,
        }
    }

    /// Combined position: positive when the user is owed more than they owe
    pub fn net_position(&self) -> f64 {
        self.you_are_owed - self.you_owe
    }
}

/// A netted directional debt: `from` owes `to` the given amount.
///
/// After netting, at most one such edge exists per pair of participants per
/// currency, and its amount always exceeds the settlement epsilon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetDebtEdge {
    /// The participant who owes
    pub from: String,
    /// The participant who is owed
    pub to: String,
    /// Netted amount, strictly above the settlement epsilon
    pub amount: f64,
    /// Currency the debt is denominated in
    pub currency: String,
}

/// A registered user of the mock identity store.
///
/// This is deliberately a toy: credentials are kept in plain text and exist
/// only so the rest of the system has a "current user" to classify debts by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: NaiveDateTime,
}

impl User {
    /// Create a new user record with the current timestamp
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            username,
            email,
            password,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Errors that can occur in the bill-splitting system
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Username or email already exists: {0}")]
    UserExists(String),
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Result type for bill-splitting operations
pub type SplitResult<T> = Result<T, SplitError>;
