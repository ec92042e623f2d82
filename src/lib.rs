//! # Billsplit Core
//!
//! The core of a bill-splitting application: shared expense records,
//! per-currency balance summaries, and minimal netted "who owes whom" debts.
//!
//! ## Features
//!
//! - **Expense tracking**: per-user ledgers of shared expenses split equally
//!   among participants, with settle and delete operations
//! - **Balance summaries**: "you owe / you are owed / total" per currency,
//!   from the current user's viewpoint
//! - **Debt netting**: at most one directed debt per pair of participants
//!   per currency, with sub-cent noise treated as settled
//! - **Multi-currency**: expenses bucket by currency code and never mix
//! - **Storage abstraction**: backend-agnostic design with trait-based
//!   per-user storage
//! - **Mock identity**: local registration and login supplying the
//!   "current user" the engine classifies debts by
//!
//! ## Quick Start
//!
//! ```rust
//! use billsplit_core::{ExpenseBuilder, SplitLedger};
//! use billsplit_core::utils::MemoryStorage;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut ledger = SplitLedger::new(MemoryStorage::new());
//!
//! let dinner = ExpenseBuilder::new("Dinner", 90.0, "Alice")
//!     .split_with("Bob")
//!     .split_with("Carol")
//!     .build()?;
//! ledger.add_expense("Bob", dinner).await?;
//!
//! let balances = ledger.balances("Bob").await?;
//! assert_eq!(balances["USD"].you_owe, 30.0);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod currency;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use auth::*;
pub use ledger::*;
pub use traits::*;
pub use types::*;
