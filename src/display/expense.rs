//! Expense display formatting
//!
//! Formats expense entries for terminal output in a table view.

use crate::config::Settings;
use crate::models::Expense;

/// Format expenses as a table, in insertion order
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n\nRun 'expense add <title> <amount>' to add one."
            .to_string();
    }

    let title_width = expenses
        .iter()
        .map(|e| e.title.chars().count())
        .max()
        .unwrap_or(5)
        .clamp(5, 32);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<title_width$}  {:<8}  {:<13}  {:>12}\n",
        "ID",
        "Date",
        "Title",
        "Category",
        "Type",
        "Amount",
        title_width = title_width
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<title_width$}  {:-<8}  {:-<13}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<title_width$}  {:<8}  {:<13}  {:>12}\n",
            expense.id.short(),
            expense.date.format(&settings.date_format).to_string(),
            truncate(&expense.title, title_width),
            expense.category,
            expense.kind,
            expense.amount.format_with_symbol(&settings.currency_symbol),
            title_width = title_width
        ));
    }

    output.push_str(&format!("\n{} entries\n", expenses.len()));
    output
}

/// Format a single expense after it was recorded
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.title));
    output.push_str(&format!("  ID:       {}\n", expense.id));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("  Category: {}\n", expense.category));
    output.push_str(&format!("  Type:     {}\n", expense.kind));
    output.push_str(&format!(
        "  Date:     {}\n",
        expense.date.format(&settings.date_format)
    ));

    output
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
