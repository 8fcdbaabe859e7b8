//! Service layer for the expense tracker
//!
//! The record store owns the entry and budget collections, the alert tracker
//! owns the one-time alert flags, and [`Tracker`] ties both to a storage
//! backend for front ends.

pub mod alerts;
pub mod records;
pub mod tracker;

pub use alerts::{AlertTracker, BudgetAlert, StatusPass};
pub use records::{RecordStore, Snapshot};
pub use tracker::Tracker;
