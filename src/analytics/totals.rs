//! Totals over the expense snapshot
//!
//! Reimbursements are recorded but never counted: they are neither income
//! nor expense, and they do not offset a category's spend.

use crate::models::{Amount, Category, EntryType, Expense};

/// Top-level income/expense summary
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverallTotals {
    pub total_income: Amount,
    pub total_expense: Amount,
    /// `total_income - total_expense`
    pub balance: Amount,
}

/// Expense total of one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Amount,
    /// Share of all expense entries, in percent
    pub share: f64,
}

fn sum_of<'a>(expenses: impl Iterator<Item = &'a Expense>, kind: EntryType) -> Amount {
    expenses.filter(|e| e.kind == kind).map(|e| e.amount).sum()
}

/// Expense minus income within one category
pub fn net_spent_by_category(expenses: &[Expense], category: Category) -> Amount {
    let in_category = || expenses.iter().filter(move |e| e.category == category);

    sum_of(in_category(), EntryType::Expense) - sum_of(in_category(), EntryType::Income)
}

/// Total income, total expense and balance over all entries
pub fn overall_totals(expenses: &[Expense]) -> OverallTotals {
    let total_income = sum_of(expenses.iter(), EntryType::Income);
    let total_expense = sum_of(expenses.iter(), EntryType::Expense);

    OverallTotals {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}

/// Per-category expense totals, in the order categories first appear
///
/// Income and reimbursements are ignored; categories without any expense
/// entry are omitted. This is the breakdown a spending pie chart plots.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for e in expenses.iter().filter(|e| e.is_expense()) {
        match totals.iter_mut().find(|t| t.category == e.category) {
            Some(t) => t.total += e.amount,
            None => totals.push(CategoryTotal {
                category: e.category,
                total: e.amount,
                share: 0.0,
            }),
        }
    }

    let grand_total: Amount = totals.iter().map(|t| t.total).sum();
    if grand_total.is_positive() {
        for t in &mut totals {
            t.share = t.total.value() / grand_total.value() * 100.0;
        }
    }

    totals
}

/// The `[income, expense]` pair an income-vs-expense bar chart plots
pub fn income_vs_expense(expenses: &[Expense]) -> [Amount; 2] {
    let totals = overall_totals(expenses);
    [totals.total_income, totals.total_expense]
}
