//! Main orchestrator coordinating expense records and derived views

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::currency;
use crate::ledger::{compute_net_debts, debts_involving, summarize_by_currency, ExpenseManager};
use crate::traits::*;
use crate::types::*;

/// The bill-splitting ledger: expense records behind a storage trait, with
/// balances and netted debts recomputed from scratch on every read.
///
/// The derived views are never cached or incrementally updated; correctness
/// comes from plain recomputation over the stored list.
pub struct SplitLedger<S: ExpenseStore> {
    expense_manager: ExpenseManager<S>,
}

impl<S: ExpenseStore> SplitLedger<S> {
    /// Create a new ledger with the given storage backend
    pub fn new(storage: S) -> Self {
        Self {
            expense_manager: ExpenseManager::new(storage),
        }
    }

    /// Create a new ledger with a custom expense validator
    pub fn with_validator(storage: S, validator: Box<dyn ExpenseValidator>) -> Self {
        Self {
            expense_manager: ExpenseManager::with_validator(storage, validator),
        }
    }

    // Expense operations
    /// Add an expense to a user's ledger
    pub async fn add_expense(&mut self, username: &str, expense: Expense) -> SplitResult<Expense> {
        self.expense_manager.add_expense(username, expense).await
    }

    /// Mark an expense as settled
    pub async fn mark_paid(&mut self, username: &str, expense_id: &str) -> SplitResult<()> {
        self.expense_manager.mark_paid(username, expense_id).await
    }

    /// Delete an expense
    pub async fn delete_expense(&mut self, username: &str, expense_id: &str) -> SplitResult<()> {
        self.expense_manager
            .delete_expense(username, expense_id)
            .await
    }

    /// Full expense history for a user
    pub async fn list_expenses(&self, username: &str) -> SplitResult<Vec<Expense>> {
        self.expense_manager.list_expenses(username).await
    }

    // Derived views
    /// Per-currency outstanding balances from the user's viewpoint
    pub async fn balances(&self, username: &str) -> SplitResult<HashMap<String, CurrencyBalance>> {
        let expenses = self.expense_manager.list_expenses(username).await?;
        summarize_by_currency(&expenses, username)
    }

    /// Netted pairwise debts per currency across the user's ledger
    pub async fn net_debts(&self, username: &str) -> SplitResult<HashMap<String, Vec<NetDebtEdge>>> {
        let expenses = self.expense_manager.list_expenses(username).await?;
        compute_net_debts(&expenses)
    }

    /// Everything the dashboard renders, derived in one pass over the ledger
    pub async fn dashboard(&self, username: &str) -> SplitResult<DashboardView> {
        let expenses = self.expense_manager.list_expenses(username).await?;

        let currency_balances = summarize_by_currency(&expenses, username)?;
        let debts_by_currency = compute_net_debts(&expenses)?;

        let expense_count = expenses.len();
        let active_expense_count = expenses.iter().filter(|e| !e.is_paid).count();

        // First currency with outstanding activity drives single-currency widgets
        let primary_currency = expenses
            .iter()
            .find(|e| !e.is_paid)
            .map(|e| e.currency_code())
            .unwrap_or_else(|| currency::DEFAULT_CURRENCY.to_string());

        Ok(DashboardView {
            currency_balances,
            debts_by_currency,
            primary_currency,
            expense_count,
            active_expense_count,
        })
    }
}

/// Derived state backing the dashboard screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Outstanding position per currency, from the viewer's standpoint
    pub currency_balances: HashMap<String, CurrencyBalance>,
    /// Netted debt edges, grouped by currency
    pub debts_by_currency: HashMap<String, Vec<NetDebtEdge>>,
    /// Currency used by widgets that can only show one
    pub primary_currency: String,
    /// Total number of recorded expenses, settled included
    pub expense_count: usize,
    /// Number of unpaid expenses
    pub active_expense_count: usize,
}

impl DashboardView {
    /// All debt edges across currencies, in stable currency order
    pub fn all_debts(&self) -> Vec<NetDebtEdge> {
        let mut currencies: Vec<&String> = self.debts_by_currency.keys().collect();
        currencies.sort();

        currencies
            .into_iter()
            .flat_map(|c| self.debts_by_currency[c].iter().cloned())
            .collect()
    }

    /// Debt edges that involve the given participant
    pub fn debts_for(&self, participant: &str) -> Vec<NetDebtEdge> {
        debts_involving(&self.all_debts(), participant)
    }

    /// Whether nobody owes anyone anything
    pub fn is_settled(&self) -> bool {
        self.debts_by_currency.values().all(|edges| edges.is_empty())
    }
}
