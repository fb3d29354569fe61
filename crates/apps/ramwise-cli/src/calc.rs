use anyhow::Result;
use ramwise_core::models::{
    DdrGeneration, Platform, Priority, Profile, RedundancyMode, RemoteAccess, ThreatProtection,
    Workload,
};
use ramwise_core::{Repository, presets, sizing};

use crate::input;
use crate::tutorial;
use crate::ui::{self, Layout};

#[derive(clap::Args)]
pub struct CalcArgs {
    /// Start from a named preset (home, media, vm, enterprise)
    #[arg(long, short)]
    pub preset: Option<String>,
    /// Free-text model name for saved history
    #[arg(long)]
    pub label: Option<String>,
    /// Installed memory in GB
    #[arg(long)]
    pub current_ram: Option<String>,
    /// Board maximum memory in GB
    #[arg(long)]
    pub max_ram: Option<String>,
    /// Number of drives in the pool
    #[arg(long)]
    pub drives: Option<String>,
    /// Capacity per drive in GB
    #[arg(long)]
    pub drive_size: Option<String>,
    /// raid0 | raid1 | raid5 | raid6 | raid10
    #[arg(long)]
    pub raid: Option<String>,
    /// backup | media | database | vm | mixed
    #[arg(long)]
    pub workload: Option<String>,
    /// Concurrent users
    #[arg(long)]
    pub users: Option<String>,
    /// CPU cores
    #[arg(long)]
    pub cores: Option<String>,
    /// synology | openmediavault | unraid | truenas | ubuntu | custom
    #[arg(long)]
    pub os: Option<String>,
    /// cost | balanced | performance
    #[arg(long)]
    pub priority: Option<String>,
    /// Link speed in Gbps
    #[arg(long)]
    pub network: Option<String>,
    /// Reachable from the internet: yes | no
    #[arg(long)]
    pub internet: Option<String>,
    /// none | port-forward | tunnel
    #[arg(long)]
    pub remote: Option<String>,
    /// none | basic | advanced
    #[arg(long)]
    pub protection: Option<String>,
    /// ddr3 | ddr4 | ddr5
    #[arg(long)]
    pub ddr: Option<String>,
    /// Persist this calculation to the saved history
    #[arg(long, short)]
    pub save: bool,
}

pub fn handle_calc(args: CalcArgs) -> Result<()> {
    let repo = Repository::init()?;
    tutorial::show_once(&repo)?;

    let profile = build_profile(&args)?;
    let report = sizing::compute_sizing(&profile);

    let layout = Layout::new();
    ui::render_report(&layout, &profile, &report);

    if args.save {
        let id = repo.save_entry(&profile, &report)?;
        layout.badge_info("SAVED", &format!("Configuration stored as entry {}", id));
    }
    layout.empty();
    Ok(())
}

/// Flag-to-profile binding. Only explicitly passed flags override the
/// preset (or blank) baseline; values themselves never fail to bind.
fn build_profile(args: &CalcArgs) -> Result<Profile> {
    let mut profile = match &args.preset {
        Some(name) => presets::get(name).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown preset: {} (expected one of: {})",
                name,
                presets::PRESET_NAMES.join(", ")
            )
        })?,
        None => Profile::default(),
    };

    if let Some(v) = &args.label {
        profile.label = v.clone();
    }
    if let Some(v) = &args.current_ram {
        profile.current_ram_gb = input::parse_gb(v);
    }
    if let Some(v) = &args.max_ram {
        profile.max_ram_gb = input::parse_gb(v);
    }
    if let Some(v) = &args.drives {
        profile.drive_count = input::parse_count(v);
    }
    if let Some(v) = &args.drive_size {
        profile.drive_capacity_gb = input::parse_count(v);
    }
    if let Some(v) = &args.raid {
        profile.redundancy = RedundancyMode::parse(v);
    }
    if let Some(v) = &args.workload {
        profile.workload = Workload::parse(v);
    }
    if let Some(v) = &args.users {
        profile.concurrent_users = input::parse_count(v);
    }
    if let Some(v) = &args.cores {
        profile.cpu_cores = input::parse_count(v);
    }
    if let Some(v) = &args.os {
        profile.platform = Platform::parse(v);
    }
    if let Some(v) = &args.priority {
        profile.priority = Priority::parse(v);
    }
    if let Some(v) = &args.network {
        profile.network_speed_gbps = input::parse_gb(v);
    }
    if let Some(v) = &args.internet {
        profile.internet_exposed = input::parse_yes_no(v);
    }
    if let Some(v) = &args.remote {
        profile.remote_access = RemoteAccess::parse(v);
    }
    if let Some(v) = &args.protection {
        profile.threat_protection = ThreatProtection::parse(v);
    }
    if let Some(v) = &args.ddr {
        profile.ddr = DdrGeneration::parse(v);
    }

    Ok(profile)
}
