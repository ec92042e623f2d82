//! Validation utilities

use crate::traits::*;
use crate::types::*;

/// Validate that an amount is a positive, finite number
pub fn validate_positive_amount(amount: f64) -> SplitResult<()> {
    if amount <= 0.0 || !amount.is_finite() {
        Err(SplitError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate an expense description
pub fn validate_description(description: &str) -> SplitResult<()> {
    if description.trim().is_empty() {
        return Err(SplitError::Validation(
            "Description is required".to_string(),
        ));
    }

    if description.len() > 500 {
        return Err(SplitError::Validation(
            "Description cannot exceed 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate a participant name as used in split sets and `paid_by`
pub fn validate_participant_name(name: &str) -> SplitResult<()> {
    if name.trim().is_empty() {
        return Err(SplitError::Validation(
            "Participant name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(SplitError::Validation(
            "Participant name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate a username for registration
pub fn validate_username(username: &str) -> SplitResult<()> {
    if username.trim().is_empty() {
        return Err(SplitError::Validation("Username is required".to_string()));
    }

    if username.len() < 3 {
        return Err(SplitError::Validation(
            "Username must be at least 3 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that an email has a plausible shape: one `@`, no whitespace,
/// and a dot somewhere in a non-empty domain
pub fn validate_email(email: &str) -> SplitResult<()> {
    if email.trim().is_empty() {
        return Err(SplitError::Validation("Email is required".to_string()));
    }

    let plausible = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .map(|(head, tail)| !head.is_empty() && !tail.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    };

    if plausible {
        Ok(())
    } else {
        Err(SplitError::Validation(
            "Please enter a valid email".to_string(),
        ))
    }
}

/// Validate a password for registration
pub fn validate_password(password: &str) -> SplitResult<()> {
    if password.is_empty() {
        return Err(SplitError::Validation("Password is required".to_string()));
    }

    if password.len() < 6 {
        return Err(SplitError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    Ok(())
}

/// Expense validator with stricter checks than the data-model invariants:
/// bounded field lengths, well-formed participant names, and no duplicate
/// participants in a split set
pub struct EnhancedExpenseValidator;

impl ExpenseValidator for EnhancedExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> SplitResult<()> {
        expense.validate()?;

        validate_description(&expense.description)?;
        validate_positive_amount(expense.amount)?;
        validate_participant_name(&expense.paid_by)?;

        let mut seen = std::collections::HashSet::new();
        for participant in &expense.split_among {
            validate_participant_name(participant)?;
            if !seen.insert(participant) {
                return Err(SplitError::Validation(format!(
                    "Participant '{}' appears more than once in the split",
                    participant
                )));
            }
        }

        Ok(())
    }
}
