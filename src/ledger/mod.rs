//! Ledger module containing expense management and the pure balance engine

pub mod core;
pub mod expense;
pub mod netting;
pub mod summary;

pub use self::core::*;
pub use expense::*;
pub use netting::*;
pub use summary::*;
