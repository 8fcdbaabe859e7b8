//! Budget limit model and derived budget status
//!
//! A budget caps net spending for one category. There is at most one budget
//! per category; setting a new one replaces the old.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;

/// Smallest limit the budget form accepts
pub const MIN_BUDGET_LIMIT: f64 = 1.0;

/// Percent of the limit at which a category counts as nearly full
pub const NEAR_LIMIT_PERCENT: f64 = 80.0;

/// Percent of the limit at which a category counts as exceeded
pub const EXCEEDED_PERCENT: f64 = 100.0;

/// A spending ceiling for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The category this budget caps (unique key)
    pub category: Category,

    /// Ceiling for net spend
    pub limit: Amount,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: Category, limit: Amount) -> Self {
        Self { category, limit }
    }

    /// Check that the limit can be divided by
    pub fn has_valid_limit(&self) -> bool {
        self.limit.is_finite() && self.limit.is_positive()
    }

    /// Validate user input before the budget is stored
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.limit.is_finite() || self.limit.value() < MIN_BUDGET_LIMIT {
            return Err(BudgetValidationError::LimitTooSmall(self.limit));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} limit: {}", self.category, self.limit)
    }
}

/// Budget compliance of one category, derived from the current snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: Category,

    /// Net spend (expense minus income)
    pub spent: Amount,

    pub limit: Amount,

    /// Utilization for display, clamped to `[0, 100]`
    pub percent: f64,

    /// Utilization in `[80, 100)`
    pub near_limit: bool,

    /// Unclamped utilization at or above 100
    pub exceeded: bool,
}

impl BudgetStatus {
    /// Compute the status of a budget given the category's net spend
    ///
    /// Returns `None` when the limit is zero, negative or not finite.
    pub fn compute(budget: &Budget, spent: Amount) -> Option<Self> {
        if !budget.has_valid_limit() {
            return None;
        }

        let raw = spent.value() / budget.limit.value() * 100.0;

        Some(Self {
            category: budget.category,
            spent,
            limit: budget.limit,
            percent: raw.clamp(0.0, EXCEEDED_PERCENT),
            near_limit: (NEAR_LIMIT_PERCENT..EXCEEDED_PERCENT).contains(&raw),
            exceeded: raw >= EXCEEDED_PERCENT,
        })
    }

    /// Remaining headroom (negative once exceeded)
    pub fn remaining(&self) -> Amount {
        self.limit - self.spent
    }

    /// Severity an alert for this status would carry
    pub fn severity(&self) -> Option<AlertSeverity> {
        if self.exceeded {
            Some(AlertSeverity::Exceeded)
        } else if self.near_limit {
            Some(AlertSeverity::NearLimit)
        } else {
            None
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} ({:.0}%)",
            self.category, self.spent, self.limit, self.percent
        )
    }
}

/// Kind of budget alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertSeverity {
    NearLimit,
    Exceeded,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NearLimit => write!(f, "near limit"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetValidationError {
    LimitTooSmall(Amount),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LimitTooSmall(limit) => write!(
                f,
                "Budget limit must be at least {:.2} (got {})",
                MIN_BUDGET_LIMIT, limit
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
