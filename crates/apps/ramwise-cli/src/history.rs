use anyhow::Result;
use ramwise_core::Repository;

use crate::ui::{Layout, format_capacity};

pub fn handle_history(limit: Option<usize>, all: bool) -> Result<()> {
    let repo = Repository::init()?;
    let layout = Layout::new();

    let entries = repo.history()?;
    if entries.is_empty() {
        layout.badge_info("HISTORY", "No saved configurations");
        layout.footer("Run 'ramwise calc --save' to keep a calculation");
        layout.empty();
        return Ok(());
    }

    let limit = if all {
        entries.len()
    } else {
        limit.unwrap_or_else(|| repo.history_display_limit())
    };
    let skipped = entries.len().saturating_sub(limit);

    layout.header("SAVED CONFIGURATIONS");
    for entry in entries.iter().skip(skipped) {
        let label = if entry.profile.label.is_empty() {
            "Unknown"
        } else {
            &entry.profile.label
        };
        layout.row(
            &format!("[{}]", entry.id),
            &format!(
                "{} - {} RAM - {}",
                label,
                format_capacity(entry.report.recommended_gb as f64),
                short_timestamp(&entry.timestamp)
            ),
        );
    }
    if skipped > 0 {
        layout.footer(&format!(
            "{} older entries hidden; use --all to show everything",
            skipped
        ));
    }
    layout.footer("Use 'ramwise compare <id> <id>' to compare entries");
    layout.empty();
    Ok(())
}

/// RFC3339 down to seconds; good enough for a list row.
pub fn short_timestamp(timestamp: &str) -> &str {
    if timestamp.len() >= 19 {
        &timestamp[..19]
    } else {
        timestamp
    }
}
