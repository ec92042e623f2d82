//! In-memory storage implementation for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory stand-in for the browser's local storage: one expense array per
/// username, plus the mock user table.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    expenses: Arc<RwLock<HashMap<String, Vec<Expense>>>>,
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            expenses: Arc::new(RwLock::new(HashMap::new())),
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.expenses.write().unwrap().clear();
        self.users.write().unwrap().clear();
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpenseStore for MemoryStorage {
    async fn load_expenses(&self, username: &str) -> SplitResult<Vec<Expense>> {
        Ok(self
            .expenses
            .read()
            .unwrap()
            .get(username)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_expenses(&mut self, username: &str, expenses: &[Expense]) -> SplitResult<()> {
        self.expenses
            .write()
            .unwrap()
            .insert(username.to_string(), expenses.to_vec());
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStorage {
    async fn save_user(&mut self, user: &User) -> SplitResult<()> {
        self.users
            .write()
            .unwrap()
            .insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn find_user(&self, username: &str) -> SplitResult<Option<User>> {
        Ok(self.users.read().unwrap().get(username).cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> SplitResult<Option<User>> {
        let users = self.users.read().unwrap();
        Ok(users
            .values()
            .find(|u| u.username == username || u.email == email)
            .cloned())
    }
}
