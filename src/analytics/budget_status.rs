//! Budget compliance queries

use crate::models::{Budget, BudgetStatus, Category, Expense};

use super::totals::net_spent_by_category;

/// Status of one category's budget
///
/// `None` when the category has no budget, or its budget has a limit that
/// cannot be divided by (zero, negative or not finite).
pub fn budget_status(
    expenses: &[Expense],
    budgets: &[Budget],
    category: Category,
) -> Option<BudgetStatus> {
    let budget = budgets.iter().find(|b| b.category == category)?;
    BudgetStatus::compute(budget, net_spent_by_category(expenses, category))
}

/// Status of every budget, in budget collection order
///
/// Budgets without a usable limit have no status and are left out.
/// Categories with no entries are included with zero spend.
pub fn all_budget_statuses(expenses: &[Expense], budgets: &[Budget]) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .filter_map(|b| BudgetStatus::compute(b, net_spent_by_category(expenses, b.category)))
        .collect()
}
