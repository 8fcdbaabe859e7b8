//! Expense Tracker - state and analytics engine for personal finances
//!
//! This library records income, expense and reimbursement entries together
//! with per-category budget limits, derives totals and budget status from
//! them, and raises each category's budget alert at most once.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, budgets, budget status)
//! - `storage`: Key-value persistence backends
//! - `observe`: Replay-of-one snapshot subscriptions
//! - `analytics`: Pure totals and budget status computations
//! - `services`: Record store, alert tracker and the facade tying them together
//! - `cli` / `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::services::Tracker;
//! use expense_tracker::storage::FileStore;
//!
//! let paths = TrackerPaths::new()?;
//! let mut tracker = Tracker::open(Arc::new(FileStore::new(paths.data_dir())));
//! let pass = tracker.refresh_alerts(|alert| println!("{}", alert));
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod observe;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
