//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod settings;
pub mod status;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_add_command, handle_delete_command, handle_list_command, AddArgs};
pub use settings::{handle_config_command, handle_theme_command};
pub use status::handle_status_command;
