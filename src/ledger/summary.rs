//! Per-currency balance summaries from the current user's viewpoint

use std::collections::HashMap;

use crate::types::*;

/// Aggregate unpaid expenses into one [`CurrencyBalance`] per currency.
///
/// Every unpaid expense counts toward its currency's `total`. The current
/// user's position accrues on top of that: as payer they are owed the whole
/// amount minus their own share (if they are in the split set); as a
/// non-paying member they owe their equal share; as a bystander they accrue
/// nothing beyond the total.
///
/// The function is pure and deterministic. Any record violating the expense
/// invariants makes it fail fast with [`SplitError::InvalidExpense`] rather
/// than producing a misleading partial result.
pub fn summarize_by_currency(
    expenses: &[Expense],
    current_user: &str,
) -> SplitResult<HashMap<String, CurrencyBalance>> {
    for expense in expenses {
        expense.validate()?;
    }

    let mut balances: HashMap<String, CurrencyBalance> = HashMap::new();

    for expense in expenses.iter().filter(|e| !e.is_paid) {
        let currency = expense.currency_code();
        let balance = balances
            .entry(currency.clone())
            .or_insert_with(|| CurrencyBalance::new(currency));

        let per_person = expense.per_person_share();
        balance.total += expense.amount;

        if expense.paid_by == current_user {
            // The payer is owed everything back except their own share
            let own_share = if expense.is_split_with(current_user) {
                per_person
            } else {
                0.0
            };
            balance.you_are_owed += expense.amount - own_share;
        } else if expense.is_split_with(current_user) {
            balance.you_owe += per_person;
        }
    }

    Ok(balances)
}
