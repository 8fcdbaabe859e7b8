//! Dashboard formatting
//!
//! The summary view printed by `expense status`: overall totals, where the
//! money went, and how each budget is holding up.

use crate::analytics::{CategoryTotal, OverallTotals};
use crate::config::Settings;
use crate::models::BudgetStatus;

use super::budget::{progress_bar, status_label};

/// Format the full dashboard
pub fn format_dashboard(
    totals: &OverallTotals,
    breakdown: &[CategoryTotal],
    statuses: &[BudgetStatus],
    settings: &Settings,
) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str("Overview\n");
    output.push_str(&format!("{}\n", "=".repeat(50)));
    output.push_str(&format!(
        "  Income:   {:>14}\n",
        totals.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Expenses: {:>14}\n",
        totals.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Balance:  {:>14}\n",
        totals.balance.format_with_symbol(symbol)
    ));

    output.push_str("\nSpending by category\n");
    output.push_str(&format!("{}\n", "-".repeat(50)));
    if breakdown.is_empty() {
        output.push_str("  (no expenses)\n");
    }
    for item in breakdown {
        output.push_str(&format!(
            "  {:<10} {:>12} {:>6.1}%\n",
            item.category,
            item.total.format_with_symbol(symbol),
            item.share
        ));
    }

    output.push_str("\nBudgets\n");
    output.push_str(&format!("{}\n", "-".repeat(50)));
    if statuses.is_empty() {
        output.push_str("  (no budgets)\n");
    }
    for status in statuses {
        output.push_str(&format!(
            "  {:<10} {} {:>5.1}%  {} / {}  {}\n",
            status.category,
            progress_bar(status.percent),
            status.percent,
            status.spent.format_with_symbol(symbol),
            status.limit.format_with_symbol(symbol),
            status_label(status)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{category_totals, overall_totals};
    use crate::models::{Amount, Budget, Category, EntryType, Expense};
    use chrono::Utc;

    #[test]
    fn test_empty_dashboard() {
        let output = format_dashboard(&OverallTotals::default(), &[], &[], &Settings::default());
        assert!(output.contains("Balance:"));
        assert!(output.contains("(no expenses)"));
        assert!(output.contains("(no budgets)"));
    }

    #[test]
    fn test_dashboard_sections() {
        let expenses = vec![
            Expense::new("Pay", Amount::new(200.0), Category::Other, Utc::now(), EntryType::Income),
            Expense::new("Taxi", Amount::new(85.0), Category::Travel, Utc::now(), EntryType::Expense),
        ];
        let status = BudgetStatus::compute(
            &Budget::new(Category::Travel, Amount::new(100.0)),
            Amount::new(85.0),
        )
        .unwrap();

        let output = format_dashboard(
            &overall_totals(&expenses),
            &category_totals(&expenses),
            &[status],
            &Settings::default(),
        );

        assert!(output.contains("$200.00"));
        assert!(output.contains("$115.00"));
        assert!(output.contains("100.0%"));
        assert!(output.contains("near limit"));
    }
}
