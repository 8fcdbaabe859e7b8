//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Budget, Category};
use crate::services::Tracker;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the spending limit of a category (replaces any existing limit)
    Set {
        /// Category name
        category: String,
        /// Limit (e.g., "400" or "400.00")
        limit: String,
    },

    /// List budgets with their current status
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    tracker: &mut Tracker,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Set { category, limit } => {
            let budget = parse_budget(&category, &limit)?;
            let limit = budget.limit;
            let category = budget.category;

            tracker.records_mut().set_budget(budget)?;

            println!(
                "Budget for {} set to {}",
                category,
                limit.format_with_symbol(&settings.currency_symbol)
            );
        }

        BudgetCommands::List => {
            print!(
                "{}",
                format_budget_list(
                    tracker.records().budgets(),
                    &tracker.budget_statuses(),
                    settings
                )
            );
        }
    }

    Ok(())
}

fn parse_budget(category: &str, limit: &str) -> TrackerResult<Budget> {
    let category: Category = category.parse().map_err(TrackerError::Validation)?;
    let limit = Amount::parse(limit).map_err(|e| TrackerError::Validation(e.to_string()))?;

    let budget = Budget::new(category, limit);
    budget
        .validate()
        .map_err(|e| TrackerError::Validation(e.to_string()))?;

    Ok(budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_parse_budget() {
        let budget = parse_budget("travel", "$1,000").unwrap();
        assert_eq!(budget.category, Category::Travel);
        assert_eq!(budget.limit, Amount::new(1000.0));

        assert!(parse_budget("Food", "0").unwrap_err().is_validation());
        assert!(parse_budget("Pets", "10").unwrap_err().is_validation());
    }

    #[test]
    fn test_set_replaces_limit() {
        let mut tracker = Tracker::open(Arc::new(MemoryStore::new()));
        let settings = Settings::default();

        for limit in ["100", "250"] {
            let cmd = BudgetCommands::Set {
                category: "Food".into(),
                limit: limit.into(),
            };
            handle_budget_command(&mut tracker, &settings, cmd).unwrap();
        }

        let budgets = tracker.records().budgets();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].limit, Amount::new(250.0));
    }
}
