//! Expense entry model
//!
//! An entry records a single income, expense or reimbursement. Entries are
//! immutable once created; the only lifecycle event after creation is
//! deletion by ID.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;
use super::ids::ExpenseId;

/// Smallest amount the entry form accepts
pub const MIN_ENTRY_AMOUNT: f64 = 1.0;

/// Kind of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    #[default]
    Expense,
    /// Recorded for reference; excluded from every total
    Reimbursement,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Reimbursement => "reimbursement",
        };
        f.pad(label)
    }
}

impl std::str::FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "reimbursement" => Ok(Self::Reimbursement),
            other => Err(format!(
                "Unknown entry type '{}' (expected income, expense or reimbursement)",
                other
            )),
        }
    }
}

/// A recorded income, expense or reimbursement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Free-text label
    pub title: String,

    /// Positive quantity in the user's currency
    pub amount: Amount,

    /// Spending category
    pub category: Category,

    /// When the transaction happened
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,

    /// Income, expense or reimbursement
    #[serde(rename = "type")]
    pub kind: EntryType,
}

impl Expense {
    /// Create a new entry with a fresh ID
    pub fn new(
        title: impl Into<String>,
        amount: Amount,
        category: Category,
        date: DateTime<Utc>,
        kind: EntryType,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            title: title.into(),
            amount,
            category,
            date,
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryType::Expense
    }

    /// Validate user input before the entry is recorded
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        if !self.amount.is_finite() || self.amount.value() < MIN_ENTRY_AMOUNT {
            return Err(ExpenseValidationError::AmountTooSmall(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.amount,
            self.category,
            self.kind
        )
    }
}

/// Parse a persisted date back into a timestamp
///
/// RFC 3339 timestamps are read as-is; a bare `YYYY-MM-DD` date is read as
/// midnight UTC.
fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

/// Parse a date as entered by the user or found in persisted data
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("Invalid date '{}' (expected YYYY-MM-DD or RFC 3339)", raw))
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    AmountTooSmall(Amount),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title cannot be empty"),
            Self::AmountTooSmall(amount) => write!(
                f,
                "Amount must be at least {:.2} (got {})",
                MIN_ENTRY_AMOUNT, amount
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
