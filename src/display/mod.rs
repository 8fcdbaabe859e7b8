//! Display formatting for terminal output
//!
//! Provides utilities for formatting entries, budgets and the dashboard for
//! terminal display.

pub mod budget;
pub mod dashboard;
pub mod expense;

pub use budget::format_budget_list;
pub use dashboard::format_dashboard;
pub use expense::{format_expense_details, format_expense_list};
