use anyhow::Result;
use ramwise_core::presets;

use crate::ui::{Layout, format_capacity};

pub fn handle_preset(name: Option<String>) -> Result<()> {
    let layout = Layout::new();

    match name {
        Some(name) => {
            let profile = presets::get(&name).ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown preset: {} (expected one of: {})",
                    name,
                    presets::PRESET_NAMES.join(", ")
                )
            })?;

            layout.header(&format!("PRESET: {}", profile.label));
            layout.row(
                "Memory",
                &format!(
                    "{} installed / {} max ({})",
                    format_capacity(profile.current_ram_gb),
                    format_capacity(profile.max_ram_gb),
                    profile.ddr.as_str()
                ),
            );
            layout.row(
                "Storage",
                &format!(
                    "{} x {} in {}",
                    profile.drive_count,
                    format_capacity(profile.drive_capacity_gb as f64),
                    profile.redundancy.as_str()
                ),
            );
            layout.row("Workload", profile.workload.as_str());
            layout.row(
                "Users / cores",
                &format!("{} / {}", profile.concurrent_users, profile.cpu_cores),
            );
            layout.row("Platform", profile.platform.as_str());
            layout.row("Priority", profile.priority.as_str());
            layout.row("Network", &format!("{} Gbps", profile.network_speed_gbps));
            layout.row(
                "Exposure",
                &format!(
                    "internet {} / remote {} / protection {}",
                    if profile.internet_exposed { "yes" } else { "no" },
                    profile.remote_access.as_str(),
                    profile.threat_protection.as_str()
                ),
            );
            layout.footer(&format!("Run 'ramwise calc --preset {}' to size it", name));
        }
        None => {
            layout.header("PRESETS");
            for name in presets::PRESET_NAMES {
                if let Some(profile) = presets::get(name) {
                    layout.row(name, &profile.label);
                }
            }
            layout.footer("Use 'ramwise preset <name>' for details");
        }
    }
    layout.empty();
    Ok(())
}
