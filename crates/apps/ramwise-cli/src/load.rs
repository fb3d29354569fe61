use anyhow::Result;
use ramwise_core::{Repository, sizing};

use crate::history::short_timestamp;
use crate::ui::{self, Layout};

/// Recompute from the most recent saved configuration. The stored report
/// is deliberately ignored: the engine is cheap and the formulas may have
/// moved since the entry was saved.
pub fn handle_load() -> Result<()> {
    let repo = Repository::init()?;
    let entry = repo
        .latest()?
        .ok_or_else(|| anyhow::anyhow!("No saved configurations found"))?;

    let report = sizing::compute_sizing(&entry.profile);

    let layout = Layout::new();
    layout.badge_info(
        "LOADED",
        &format!(
            "Entry {} from {}",
            entry.id,
            short_timestamp(&entry.timestamp)
        ),
    );
    ui::render_report(&layout, &entry.profile, &report);
    layout.empty();
    Ok(())
}
