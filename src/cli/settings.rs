//! Settings CLI commands

use crate::config::{Settings, Theme, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};

/// Handle `expense theme`: set the theme, or toggle it when none is given
pub fn handle_theme_command(
    paths: &TrackerPaths,
    settings: &mut Settings,
    theme: Option<String>,
) -> TrackerResult<()> {
    let theme = match theme {
        Some(raw) => {
            let theme: Theme = raw.parse().map_err(TrackerError::Validation)?;
            settings.theme = theme;
            theme
        }
        None => settings.toggle_theme(),
    };

    settings.save(paths)?;
    println!("Theme set to {}", theme);
    Ok(())
}

/// Handle `expense config`
pub fn handle_config_command(paths: &TrackerPaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Data directory:  {}", paths.data_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Theme:           {}", settings.theme);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
}
