//! One-time budget alerts
//!
//! Each category can raise a single "near limit" or "exceeded" alert. Once a
//! category has alerted, its flag is persisted and stays set: later passes
//! still report the category's status but never alert for it again, even if
//! spending drops back under the threshold.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::analytics::all_budget_statuses;
use crate::error::TrackerError;
use crate::models::{AlertSeverity, Budget, BudgetStatus, Category, Expense};
use crate::storage::{load_json, save_json, KeyValueStore, ALERTS_KEY};

/// An alert the caller should surface to the user
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub category: Category,
    pub severity: AlertSeverity,
    /// The status that triggered the alert
    pub status: BudgetStatus,
}

impl BudgetAlert {
    /// Short user-facing message
    pub fn message(&self) -> String {
        match self.severity {
            AlertSeverity::Exceeded => format!("{} budget exceeded", self.category),
            AlertSeverity::NearLimit => format!("{} budget almost full", self.category),
        }
    }
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Result of one status refresh
#[derive(Debug, Clone, Default)]
pub struct StatusPass {
    /// Status of every budget with a usable limit, in budget order
    pub statuses: Vec<BudgetStatus>,
    /// Alerts raised during this pass
    pub alerts: Vec<BudgetAlert>,
    /// Set when the flag map could not be written back
    pub persist_error: Option<TrackerError>,
}

/// Persisted per-category "already alerted" flags
pub struct AlertTracker {
    store: Arc<dyn KeyValueStore>,
    /// Keyed by category name so unknown keys in old data are carried along
    shown: BTreeMap<String, bool>,
    load_warning: Option<TrackerError>,
}

impl AlertTracker {
    /// Load the flag map; an unreadable map starts empty
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let (shown, load_warning): (BTreeMap<String, bool>, _) =
            load_json(store.as_ref(), ALERTS_KEY);
        if let Some(warning) = &load_warning {
            warn!(error = %warning, "Starting with no alerts shown");
        }

        Self {
            store,
            shown,
            load_warning,
        }
    }

    /// Problem found while loading the flag map
    pub fn load_warning(&self) -> Option<&TrackerError> {
        self.load_warning.as_ref()
    }

    /// Whether this category has already raised its alert
    pub fn is_alerted(&self, category: Category) -> bool {
        self.shown.get(category.name()).copied().unwrap_or(false)
    }

    /// Categories that have raised their alert, in display order
    pub fn alerted_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.is_alerted(*c))
            .collect()
    }

    /// Recompute every budget status and raise alerts not yet shown
    ///
    /// `on_alert` is called once per alert, in budget order, as each category
    /// moves to the alerted state. The flag map is written back after every
    /// pass; a failed write is reported in [`StatusPass::persist_error`] and
    /// the in-memory flags are kept.
    pub fn refresh<F>(
        &mut self,
        expenses: &[Expense],
        budgets: &[Budget],
        mut on_alert: F,
    ) -> StatusPass
    where
        F: FnMut(&BudgetAlert),
    {
        let statuses = all_budget_statuses(expenses, budgets);
        let mut alerts = Vec::new();

        for status in &statuses {
            if self.is_alerted(status.category) {
                continue;
            }

            // exceeded (>= 100%) and near_limit ([80%, 100%)) never hold together
            let Some(severity) = status.severity() else {
                continue;
            };

            let alert = BudgetAlert {
                category: status.category,
                severity,
                status: status.clone(),
            };
            info!(category = %alert.category, severity = %severity, "Budget alert");

            self.shown.insert(status.category.name().to_string(), true);
            on_alert(&alert);
            alerts.push(alert);
        }

        debug!(
            statuses = statuses.len(),
            alerts = alerts.len(),
            "Status pass complete"
        );

        let persist_error = save_json(self.store.as_ref(), ALERTS_KEY, &self.shown)
            .inspect_err(|e| warn!(error = %e, "Alert flags not persisted"))
            .err();

        StatusPass {
            statuses,
            alerts,
            persist_error,
        }
    }
}
