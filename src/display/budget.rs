//! Budget display formatting

use crate::config::Settings;
use crate::models::{Budget, BudgetStatus};

const BAR_WIDTH: usize = 20;

/// Format budgets with their current status
///
/// Budgets without a usable limit have no status and show "-".
pub fn format_budget_list(
    budgets: &[Budget],
    statuses: &[BudgetStatus],
    settings: &Settings,
) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n\nRun 'expense budget set <category> <limit>' to add one."
            .to_string();
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:>12}  {:>12}  {:>7}  {}\n",
        "Category", "Spent", "Limit", "Used", "Status"
    ));
    output.push_str(&format!(
        "{:-<10}  {:->12}  {:->12}  {:->7}  {:-<12}\n",
        "", "", "", "", ""
    ));

    for budget in budgets {
        match statuses.iter().find(|s| s.category == budget.category) {
            Some(status) => output.push_str(&format!(
                "{:<10}  {:>12}  {:>12}  {:>6.1}%  {}\n",
                status.category,
                status.spent.format_with_symbol(symbol),
                status.limit.format_with_symbol(symbol),
                status.percent,
                status_label(status)
            )),
            None => output.push_str(&format!(
                "{:<10}  {:>12}  {:>12}  {:>7}  {}\n",
                budget.category,
                "-",
                budget.limit.format_with_symbol(symbol),
                "-",
                "invalid limit"
            )),
        }
    }

    output
}

/// One-word state of a status
pub fn status_label(status: &BudgetStatus) -> &'static str {
    if status.exceeded {
        "EXCEEDED"
    } else if status.near_limit {
        "near limit"
    } else {
        "ok"
    }
}

/// Progress bar for a clamped percent
pub fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
