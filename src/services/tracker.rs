//! Tracker facade
//!
//! Wires the record store and the alert tracker to one storage backend and
//! exposes the queries front ends need. Construct one per application and
//! pass it by reference.

use std::sync::Arc;

use crate::analytics::{
    self, all_budget_statuses, category_totals, overall_totals, CategoryTotal, OverallTotals,
};
use crate::error::TrackerError;
use crate::models::{Amount, BudgetStatus, Category};
use crate::storage::KeyValueStore;

use super::alerts::{AlertTracker, BudgetAlert, StatusPass};
use super::records::RecordStore;

/// Record store plus alert tracker over a shared backend
pub struct Tracker {
    records: RecordStore,
    alerts: AlertTracker,
}

impl Tracker {
    /// Load all persisted state from a backend
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            records: RecordStore::open(Arc::clone(&store)),
            alerts: AlertTracker::open(store),
        }
    }

    /// Read access to the record store
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// Write access to the record store
    pub fn records_mut(&mut self) -> &mut RecordStore {
        &mut self.records
    }

    /// Read access to the alert flags
    pub fn alerts(&self) -> &AlertTracker {
        &self.alerts
    }

    /// Every recoverable problem met while loading persisted state
    pub fn load_warnings(&self) -> Vec<&TrackerError> {
        self.records
            .load_warnings()
            .iter()
            .chain(self.alerts.load_warning())
            .collect()
    }

    /// Net spend of one category
    pub fn net_spent(&self, category: Category) -> Amount {
        analytics::net_spent_by_category(self.records.expenses(), category)
    }

    /// Budget status of one category, `None` without a usable budget
    pub fn budget_status(&self, category: Category) -> Option<BudgetStatus> {
        analytics::budget_status(self.records.expenses(), self.records.budgets(), category)
    }

    /// Status of every budget, without touching the alert flags
    pub fn budget_statuses(&self) -> Vec<BudgetStatus> {
        all_budget_statuses(self.records.expenses(), self.records.budgets())
    }

    /// Income, expense and balance over all entries
    pub fn totals(&self) -> OverallTotals {
        overall_totals(self.records.expenses())
    }

    /// Expense totals per category
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        category_totals(self.records.expenses())
    }

    /// Run a status pass over the current snapshots, raising pending alerts
    pub fn refresh_alerts<F>(&mut self, on_alert: F) -> StatusPass
    where
        F: FnMut(&BudgetAlert),
    {
        self.alerts
            .refresh(self.records.expenses(), self.records.budgets(), on_alert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertSeverity, Budget, EntryType, Expense};
    use crate::storage::{MemoryStore, EXPENSES_KEY};
    use chrono::Utc;

    fn entry(category: Category, kind: EntryType, amount: f64) -> Expense {
        Expense::new("entry", Amount::new(amount), category, Utc::now(), kind)
    }

    #[test]
    fn test_food_scenario_end_to_end() {
        let mut tracker = Tracker::open(Arc::new(MemoryStore::new()));
        let records = tracker.records_mut();
        records
            .add_expense(entry(Category::Food, EntryType::Expense, 50.0))
            .unwrap();
        records
            .add_expense(entry(Category::Food, EntryType::Income, 10.0))
            .unwrap();
        records
            .set_budget(Budget::new(Category::Food, Amount::new(40.0)))
            .unwrap();

        assert_eq!(tracker.net_spent(Category::Food), Amount::new(40.0));
        let status = tracker.budget_status(Category::Food).unwrap();
        assert_eq!(status.percent, 100.0);
        assert!(status.exceeded);
        assert!(!status.near_limit);

        let mut fired = Vec::new();
        let pass = tracker.refresh_alerts(|a| fired.push(a.severity));
        assert_eq!(fired, vec![AlertSeverity::Exceeded]);
        assert_eq!(pass.statuses, vec![status]);
        assert!(tracker.alerts().is_alerted(Category::Food));
    }

    #[test]
    fn test_shared_backend_state_reloads() {
        let backend = Arc::new(MemoryStore::new());
        {
            let mut tracker = Tracker::open(backend.clone());
            tracker
                .records_mut()
                .add_expense(entry(Category::Travel, EntryType::Expense, 85.0))
                .unwrap();
            tracker
                .records_mut()
                .set_budget(Budget::new(Category::Travel, Amount::new(100.0)))
                .unwrap();
            assert_eq!(tracker.refresh_alerts(|_| {}).alerts.len(), 1);
        }

        let mut tracker = Tracker::open(backend);
        assert_eq!(tracker.records().expenses().len(), 1);
        assert!(tracker.refresh_alerts(|_| {}).alerts.is_empty());
        assert_eq!(tracker.totals().total_expense, Amount::new(85.0));
    }

    #[test]
    fn test_load_warnings_collected() {
        let backend = Arc::new(MemoryStore::with_entries([(EXPENSES_KEY, "{")]));
        let tracker = Tracker::open(backend);
        assert_eq!(tracker.load_warnings().len(), 1);
        assert!(tracker.category_totals().is_empty());
        assert!(tracker.budget_statuses().is_empty());
    }
}
