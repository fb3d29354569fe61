use anyhow::Result;
use ramwise_core::Repository;
use ramwise_core::models::SavedEntry;

use crate::history::short_timestamp;
use crate::ui::{Layout, format_capacity};

const LABEL_WIDTH: usize = 16;
const COLUMN_WIDTH: usize = 20;

pub fn handle_compare(ids: Vec<i64>) -> Result<()> {
    let repo = Repository::init()?;

    if repo.entry_count()? < 2 {
        anyhow::bail!("Need at least 2 saved configurations to compare");
    }
    if ids.len() < 2 || ids.len() > 4 {
        anyhow::bail!("Select 2-4 saved configurations to compare");
    }

    let mut entries = Vec::new();
    for id in &ids {
        let entry = repo
            .entry(*id)?
            .ok_or_else(|| anyhow::anyhow!("No saved configuration with id {}", id))?;
        entries.push(entry);
    }

    let layout = Layout::new();
    layout.header("COMPARISON");

    let rows: [(&str, fn(&SavedEntry) -> String); 12] = [
        ("NAS model", |e| display_label(&e.profile.label)),
        ("Current RAM", |e| format_capacity(e.profile.current_ram_gb)),
        ("Max RAM", |e| format_capacity(e.profile.max_ram_gb)),
        ("Drives", |e| e.profile.drive_count.to_string()),
        ("Drive size", |e| {
            format_capacity(e.profile.drive_capacity_gb as f64)
        }),
        ("RAID", |e| e.profile.redundancy.as_str().to_string()),
        ("Workload", |e| e.profile.workload.as_str().to_string()),
        ("Users", |e| e.profile.concurrent_users.to_string()),
        ("CPU cores", |e| e.profile.cpu_cores.to_string()),
        ("Platform", |e| e.profile.platform.as_str().to_string()),
        ("Recommended", |e| {
            format_capacity(e.report.recommended_gb as f64)
        }),
        ("Saved", |e| short_timestamp(&e.timestamp).to_string()),
    ];

    let mut heading = format!("  {:<width$}", "", width = LABEL_WIDTH);
    for entry in &entries {
        heading.push_str(&format!(
            "{:<width$}",
            format!("[{}]", entry.id),
            width = COLUMN_WIDTH
        ));
    }
    println!("{}", heading);

    for (label, cell) in rows {
        let mut line = format!("  {:<width$}", label, width = LABEL_WIDTH);
        for entry in &entries {
            line.push_str(&format!("{:<width$}", cell(entry), width = COLUMN_WIDTH));
        }
        println!("{}", line);
    }

    layout.empty();
    Ok(())
}

fn display_label(label: &str) -> String {
    if label.is_empty() {
        "Unknown".to_string()
    } else {
        label.to_string()
    }
}
