//! Expense CLI commands
//!
//! Collects and validates entry input, then hands it to the record store.

use chrono::Utc;
use clap::Args;
use tracing::debug;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::expense::parse_date;
use crate::models::{Amount, Category, EntryType, Expense, ExpenseId};
use crate::services::Tracker;

/// Arguments of `expense add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was for
    pub title: String,

    /// Amount (e.g., "12.50" or "$1,250")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category (Food, Rent, Travel, Shopping, Other)
    #[arg(short, long, default_value = "Food")]
    pub category: String,

    /// Entry type (income, expense, reimbursement)
    #[arg(short = 't', long = "type", default_value = "expense")]
    pub kind: String,

    /// Date (YYYY-MM-DD or RFC 3339, defaults to now)
    #[arg(short, long)]
    pub date: Option<String>,
}

impl AddArgs {
    /// Build a validated entry from the raw arguments
    pub fn to_expense(&self) -> TrackerResult<Expense> {
        let amount = Amount::parse(&self.amount)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        let category: Category = self.category.parse().map_err(TrackerError::Validation)?;
        let kind: EntryType = self.kind.parse().map_err(TrackerError::Validation)?;
        let date = match &self.date {
            Some(raw) => parse_date(raw).map_err(TrackerError::Validation)?,
            None => Utc::now(),
        };

        let expense = Expense::new(self.title.trim(), amount, category, date, kind);
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        Ok(expense)
    }
}

/// Handle `expense add`
pub fn handle_add_command(
    tracker: &mut Tracker,
    settings: &Settings,
    args: AddArgs,
) -> TrackerResult<()> {
    let expense = args.to_expense()?;
    let details = format_expense_details(&expense, settings);
    let kind = expense.kind;

    tracker.records_mut().add_expense(expense)?;

    println!("Recorded {}", kind);
    print!("{}", details);
    Ok(())
}

/// Handle `expense list`
pub fn handle_list_command(tracker: &Tracker, settings: &Settings) -> TrackerResult<()> {
    print!(
        "{}",
        format_expense_list(tracker.records().expenses(), settings)
    );
    Ok(())
}

/// Handle `expense delete`
pub fn handle_delete_command(tracker: &mut Tracker, reference: &str) -> TrackerResult<()> {
    let id = resolve_expense_id(tracker, reference)?;
    debug!(%id, reference, "Resolved expense reference");

    tracker.records_mut().delete_expense(id)?;

    println!("Deleted expense {}", id.short());
    Ok(())
}

/// Find the single entry a user-supplied reference points at
///
/// Accepts the full ID or an unambiguous prefix (with or without `exp-`).
pub fn resolve_expense_id(tracker: &Tracker, reference: &str) -> TrackerResult<ExpenseId> {
    let mut matches = tracker
        .records()
        .expenses()
        .iter()
        .map(|e| e.id)
        .filter(|id| id.matches(reference));

    let Some(first) = matches.next() else {
        return Err(TrackerError::expense_not_found(reference));
    };

    if matches.next().is_some() {
        return Err(TrackerError::Validation(format!(
            "Expense reference '{}' is ambiguous, use more characters",
            reference
        )));
    }

    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn args(title: &str, amount: &str) -> AddArgs {
        AddArgs {
            title: title.into(),
            amount: amount.into(),
            category: "Food".into(),
            kind: "expense".into(),
            date: None,
        }
    }

    #[test]
    fn test_defaults() {
        let expense = args("Lunch", "12.50").to_expense().unwrap();
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.kind, EntryType::Expense);
        assert_eq!(expense.amount, Amount::new(12.5));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(args("", "12").to_expense().unwrap_err().is_validation());
        assert!(args("Gum", "0.5").to_expense().unwrap_err().is_validation());
        assert!(args("Gum", "abc").to_expense().unwrap_err().is_validation());

        let mut bad_category = args("Gum", "2");
        bad_category.category = "Pets".into();
        assert!(bad_category.to_expense().unwrap_err().is_validation());

        let mut bad_date = args("Gum", "2");
        bad_date.date = Some("yesterday".into());
        assert!(bad_date.to_expense().unwrap_err().is_validation());
    }

    #[test]
    fn test_explicit_fields() {
        let mut input = args("Salary", "3000");
        input.category = "other".into();
        input.kind = "income".into();
        input.date = Some("2025-02-01".into());

        let expense = input.to_expense().unwrap();
        assert_eq!(expense.category, Category::Other);
        assert!(expense.is_income());
        assert_eq!(expense.date.format("%Y-%m-%d").to_string(), "2025-02-01");
    }

    #[test]
    fn test_resolve_expense_id() {
        let mut tracker = Tracker::open(Arc::new(MemoryStore::new()));
        let expense = args("Lunch", "12").to_expense().unwrap();
        let id = expense.id;
        tracker.records_mut().add_expense(expense).unwrap();

        assert_eq!(resolve_expense_id(&tracker, &id.short()).unwrap(), id);
        assert_eq!(resolve_expense_id(&tracker, &id.to_string()).unwrap(), id);
        assert!(resolve_expense_id(&tracker, "exp-zzzz")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_delete_removes_entry() {
        let mut tracker = Tracker::open(Arc::new(MemoryStore::new()));
        let expense = args("Lunch", "12").to_expense().unwrap();
        let reference = expense.id.short();
        tracker.records_mut().add_expense(expense).unwrap();

        handle_delete_command(&mut tracker, &reference).unwrap();
        assert!(tracker.records().expenses().is_empty());
    }
}
