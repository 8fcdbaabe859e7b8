//! Configuration module for the expense tracker
//!
//! - Path resolution for settings and data files
//! - User settings persistence (theme, display preferences)

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{Settings, Theme};
