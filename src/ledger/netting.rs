//! Pairwise debt netting, per currency

use std::collections::{BTreeSet, HashMap};

use crate::types::*;

/// Net amounts at or below this threshold are treated as settled.
///
/// This also absorbs the floating-point noise that equal splits introduce.
pub const SETTLEMENT_EPSILON: f64 = 0.01;

/// Compute the minimal set of directed debts between all participants,
/// per currency, over unpaid expenses.
///
/// The participant universe is the union of every `paid_by` and `split_among`
/// name across *all* supplied expenses, paid ones included, so settling an
/// expense never changes who the ledger knows about, only the magnitudes.
///
/// Per currency, gross obligations accumulate first (each non-paying member
/// of a split owes the payer their equal share; multiple expenses between the
/// same pair stack up), and each unordered pair is then netted exactly once.
/// A pair ends up with at most one directed edge, only emitted when the net
/// amount exceeds [`SETTLEMENT_EPSILON`]. Edges never cross currencies.
///
/// Unlike [`summarize_by_currency`](crate::ledger::summarize_by_currency),
/// this takes no viewer: netting is the same for everyone, and the
/// per-viewer classification of edges is a separate filtering step via
/// [`debts_involving`] (or [`DashboardView::debts_for`](crate::ledger::DashboardView::debts_for)).
///
/// Fails fast with [`SplitError::InvalidExpense`] on any record violating the
/// expense invariants; a malformed record is a producer bug and must not be
/// silently skipped.
pub fn compute_net_debts(expenses: &[Expense]) -> SplitResult<HashMap<String, Vec<NetDebtEdge>>> {
    for expense in expenses {
        expense.validate()?;
    }

    // Stable, ordered universe of names
    let mut universe: BTreeSet<&str> = BTreeSet::new();
    for expense in expenses {
        universe.insert(expense.paid_by.as_str());
        for participant in &expense.split_among {
            universe.insert(participant.as_str());
        }
    }
    let participants: Vec<&str> = universe.into_iter().collect();

    // Gross accumulation: owes[(debtor, payer)] per currency
    let mut gross: HashMap<String, HashMap<(&str, &str), f64>> = HashMap::new();

    for expense in expenses.iter().filter(|e| !e.is_paid) {
        let per_person = expense.per_person_share();
        let ledger = gross.entry(expense.currency_code()).or_default();

        for participant in &expense.split_among {
            if participant != &expense.paid_by {
                *ledger
                    .entry((participant.as_str(), expense.paid_by.as_str()))
                    .or_insert(0.0) += per_person;
            }
        }
    }

    // Net each unordered pair exactly once, per currency
    let mut debts = HashMap::new();

    for (currency, ledger) in gross {
        let mut edges = Vec::new();

        for (i, &u) in participants.iter().enumerate() {
            for &v in &participants[i + 1..] {
                let u_owes_v = ledger.get(&(u, v)).copied().unwrap_or(0.0);
                let v_owes_u = ledger.get(&(v, u)).copied().unwrap_or(0.0);
                let net = u_owes_v - v_owes_u;

                if net > SETTLEMENT_EPSILON {
                    edges.push(NetDebtEdge {
                        from: u.to_string(),
                        to: v.to_string(),
                        amount: net,
                        currency: currency.clone(),
                    });
                } else if net < -SETTLEMENT_EPSILON {
                    edges.push(NetDebtEdge {
                        from: v.to_string(),
                        to: u.to_string(),
                        amount: -net,
                        currency: currency.clone(),
                    });
                }
            }
        }

        debts.insert(currency, edges);
    }

    Ok(debts)
}

/// Edges touching a given participant, in either direction.
///
/// This is what the balance summary panel shows as "relevant" debts.
pub fn debts_involving(edges: &[NetDebtEdge], participant: &str) -> Vec<NetDebtEdge> {
    edges
        .iter()
        .filter(|e| e.from == participant || e.to == participant)
        .cloned()
        .collect()
}
