//! Core data models for the expense tracker
//!
//! This module contains the data structures of the tracking domain: expense
//! entries, category budgets, and the budget status derived from them.

pub mod amount;
pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;

pub use amount::Amount;
pub use budget::{AlertSeverity, Budget, BudgetStatus};
pub use category::Category;
pub use expense::{EntryType, Expense};
pub use ids::ExpenseId;
