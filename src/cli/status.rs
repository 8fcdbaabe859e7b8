//! Dashboard command
//!
//! Prints totals and budget status, then raises any alert not shown before.

use crate::config::Settings;
use crate::display::format_dashboard;
use crate::error::TrackerResult;
use crate::services::Tracker;

/// Handle `expense status`
pub fn handle_status_command(tracker: &mut Tracker, settings: &Settings) -> TrackerResult<()> {
    let pass = tracker.refresh_alerts(|alert| println!("Alert: {}", alert));
    if !pass.alerts.is_empty() {
        println!();
    }

    print!(
        "{}",
        format_dashboard(
            &tracker.totals(),
            &tracker.category_totals(),
            &pass.statuses,
            settings
        )
    );

    match pass.persist_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
