//! Analytics over expense and budget snapshots
//!
//! Everything here is a pure function of the snapshots passed in: no I/O,
//! no access to the record store.

pub mod budget_status;
pub mod totals;

pub use budget_status::{all_budget_statuses, budget_status};
pub use totals::{
    category_totals, income_vs_expense, net_spent_by_category, overall_totals, CategoryTotal,
    OverallTotals,
};
