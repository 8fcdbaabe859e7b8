use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use expense_tracker::cli::{
    handle_add_command, handle_budget_command, handle_config_command, handle_delete_command,
    handle_list_command, handle_status_command, handle_theme_command, AddArgs, BudgetCommands,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::services::Tracker;
use expense_tracker::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal finance tracker",
    long_about = "Records income and expenses by category, tracks spending against \
                  per-category budget limits, and warns once when a budget is \
                  almost full or exceeded."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income, expense or reimbursement
    Add(AddArgs),

    /// List recorded entries
    #[command(alias = "ls")]
    List,

    /// Delete an entry by ID (or unambiguous ID prefix)
    #[command(alias = "rm")]
    Delete {
        /// Entry ID as shown by `expense list`
        id: String,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show totals and budget status, raising pending alerts
    Status,

    /// Show or change the color theme (toggles when no theme is given)
    Theme {
        /// light or dark
        theme: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Expense Tracker - personal finance tracking");
        println!();
        println!("Run 'expense --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Add(args) => handle_add_command(&mut open_tracker(&paths)?, &settings, args)?,
        Commands::List => handle_list_command(&open_tracker(&paths)?, &settings)?,
        Commands::Delete { id } => handle_delete_command(&mut open_tracker(&paths)?, &id)?,
        Commands::Budget(cmd) => {
            handle_budget_command(&mut open_tracker(&paths)?, &settings, cmd)?
        }
        Commands::Status => handle_status_command(&mut open_tracker(&paths)?, &settings)?,
        Commands::Theme { theme } => handle_theme_command(&paths, &mut settings, theme)?,
        Commands::Config => handle_config_command(&paths, &settings),
    }

    Ok(())
}

/// Load persisted entries, budgets and alert flags from the data directory
fn open_tracker(paths: &TrackerPaths) -> Result<Tracker> {
    paths.ensure_directories()?;

    let tracker = Tracker::open(Arc::new(FileStore::new(paths.data_dir())));
    for warning in tracker.load_warnings() {
        eprintln!("Warning: {}", warning);
    }

    Ok(tracker)
}
