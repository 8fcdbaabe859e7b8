//! Record store
//!
//! Holds the authoritative expense and budget collections, publishes a new
//! snapshot after every change, and mirrors each change to durable storage.
//! A failed write never rolls back the in-memory change: the snapshot that
//! subscribers see is the truth, storage is best effort.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Expense, ExpenseId};
use crate::observe::{Subject, SubscriptionId};
use crate::storage::{load_json, save_json, KeyValueStore, BUDGETS_KEY, EXPENSES_KEY};

/// Immutable view of a whole collection at one instant
pub type Snapshot<T> = Arc<Vec<T>>;

/// Authoritative store of expense entries and budgets
pub struct RecordStore {
    store: Arc<dyn KeyValueStore>,
    expenses: Subject<Snapshot<Expense>>,
    budgets: Subject<Snapshot<Budget>>,
    load_warnings: Vec<TrackerError>,
}

impl RecordStore {
    /// Load both collections from storage
    ///
    /// Never fails. A collection whose blob is missing starts empty; one whose
    /// blob is unreadable also starts empty and the problem is kept in
    /// [`load_warnings`](Self::load_warnings).
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let (expenses, expense_warning): (Vec<Expense>, _) =
            load_json(store.as_ref(), EXPENSES_KEY);
        let (budgets, budget_warning): (Vec<Budget>, _) = load_json(store.as_ref(), BUDGETS_KEY);

        let load_warnings: Vec<TrackerError> =
            expense_warning.into_iter().chain(budget_warning).collect();
        for warning in &load_warnings {
            warn!(error = %warning, "Starting with an empty collection");
        }

        debug!(
            expenses = expenses.len(),
            budgets = budgets.len(),
            "Record store loaded"
        );

        Self {
            store,
            expenses: Subject::new(Arc::new(expenses)),
            budgets: Subject::new(Arc::new(budgets)),
            load_warnings,
        }
    }

    /// Problems found while loading persisted data
    pub fn load_warnings(&self) -> &[TrackerError] {
        &self.load_warnings
    }

    /// Current expense entries, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        self.expenses.current()
    }

    /// Current budgets, in the order they were last set
    pub fn budgets(&self) -> &[Budget] {
        self.budgets.current()
    }

    /// Shared handle to the current expense snapshot
    pub fn expense_snapshot(&self) -> Snapshot<Expense> {
        Arc::clone(self.expenses.current())
    }

    /// Shared handle to the current budget snapshot
    pub fn budget_snapshot(&self) -> Snapshot<Budget> {
        Arc::clone(self.budgets.current())
    }

    /// Get an entry by ID
    pub fn get_expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses().iter().find(|e| e.id == id)
    }

    /// Watch the expense collection; the observer sees the current snapshot first
    pub fn observe_expenses<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot<Expense>) + 'static,
    {
        self.expenses.subscribe(observer)
    }

    /// Watch the budget collection; the observer sees the current snapshot first
    pub fn observe_budgets<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot<Budget>) + 'static,
    {
        self.budgets.subscribe(observer)
    }

    pub fn unsubscribe_expenses(&mut self, id: SubscriptionId) -> bool {
        self.expenses.unsubscribe(id)
    }

    pub fn unsubscribe_budgets(&mut self, id: SubscriptionId) -> bool {
        self.budgets.unsubscribe(id)
    }

    /// Channel of expense snapshots, starting with the current one
    pub fn expense_feed(&mut self) -> Receiver<Snapshot<Expense>> {
        self.expenses.channel()
    }

    /// Channel of budget snapshots, starting with the current one
    pub fn budget_feed(&mut self) -> Receiver<Snapshot<Budget>> {
        self.budgets.channel()
    }

    /// Append an entry
    ///
    /// An entry whose ID is already present is rejected with
    /// [`TrackerError::Duplicate`] and nothing changes. Otherwise the entry is
    /// recorded and published; a [`TrackerError::PersistenceWrite`] means only
    /// the durable copy is stale.
    pub fn add_expense(&mut self, expense: Expense) -> TrackerResult<()> {
        if self.get_expense(expense.id).is_some() {
            return Err(TrackerError::Duplicate {
                entity_type: "Expense",
                identifier: expense.id.to_string(),
            });
        }

        debug!(id = %expense.id, title = %expense.title, "Adding entry");

        let mut updated = self.expenses().to_vec();
        updated.push(expense);
        self.commit_expenses(updated)
    }

    /// Remove the entry with this ID
    ///
    /// Returns whether an entry was removed. A missing ID is not an error:
    /// the unchanged collection is still persisted and published.
    pub fn delete_expense(&mut self, id: ExpenseId) -> TrackerResult<bool> {
        let mut updated = self.expenses().to_vec();
        let removed = match updated.iter().position(|e| e.id == id) {
            Some(index) => {
                updated.remove(index);
                true
            }
            None => false,
        };

        debug!(id = %id, removed, "Deleting entry");

        self.commit_expenses(updated)?;
        Ok(removed)
    }

    /// Set the budget for a category, replacing any existing one
    pub fn set_budget(&mut self, budget: Budget) -> TrackerResult<()> {
        debug!(category = %budget.category, limit = %budget.limit, "Setting budget");

        let mut updated: Vec<Budget> = self
            .budgets()
            .iter()
            .filter(|b| b.category != budget.category)
            .cloned()
            .collect();
        updated.push(budget);

        self.budgets.publish(Arc::new(updated));
        self.persist(BUDGETS_KEY, self.budgets())
    }

    fn commit_expenses(&mut self, updated: Vec<Expense>) -> TrackerResult<()> {
        self.expenses.publish(Arc::new(updated));
        self.persist(EXPENSES_KEY, self.expenses())
    }

    fn persist<T: serde::Serialize>(&self, key: &str, records: &[T]) -> TrackerResult<()> {
        save_json(self.store.as_ref(), key, records).inspect_err(|e| {
            warn!(error = %e, "Keeping in-memory change without a durable copy");
        })
    }
}
