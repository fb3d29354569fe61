//! Named profile templates used to pre-fill a calculation.

use crate::models::{
    DdrGeneration, Platform, Priority, Profile, RedundancyMode, RemoteAccess, ThreatProtection,
    Workload,
};

pub const PRESET_NAMES: [&str; 4] = ["home", "media", "vm", "enterprise"];

/// Look up a template by name. Unknown names are a caller-surfaced
/// condition, not a fallback.
pub fn get(name: &str) -> Option<Profile> {
    match name.trim().to_ascii_lowercase().as_str() {
        "home" => Some(Profile {
            label: "Home NAS".to_string(),
            current_ram_gb: 4.0,
            max_ram_gb: 16.0,
            drive_count: 2,
            drive_capacity_gb: 2000,
            redundancy: RedundancyMode::Mirror,
            workload: Workload::Backup,
            concurrent_users: 3,
            cpu_cores: 4,
            platform: Platform::Synology,
            priority: Priority::Balanced,
            network_speed_gbps: 1.0,
            internet_exposed: false,
            remote_access: RemoteAccess::PortForward,
            threat_protection: ThreatProtection::Basic,
            ddr: DdrGeneration::Ddr4,
        }),
        "media" => Some(Profile {
            label: "Media Server".to_string(),
            current_ram_gb: 8.0,
            max_ram_gb: 32.0,
            drive_count: 4,
            drive_capacity_gb: 4000,
            redundancy: RedundancyMode::ParityHigh,
            workload: Workload::Media,
            concurrent_users: 8,
            cpu_cores: 6,
            platform: Platform::Unraid,
            priority: Priority::Performance,
            network_speed_gbps: 2.5,
            internet_exposed: true,
            remote_access: RemoteAccess::Tunnel,
            threat_protection: ThreatProtection::Advanced,
            ddr: DdrGeneration::Ddr4,
        }),
        "vm" => Some(Profile {
            label: "VM Host".to_string(),
            current_ram_gb: 16.0,
            max_ram_gb: 64.0,
            drive_count: 4,
            drive_capacity_gb: 2000,
            redundancy: RedundancyMode::StripedMirror,
            workload: Workload::Virtualization,
            concurrent_users: 1,
            cpu_cores: 12,
            platform: Platform::TrueNas,
            priority: Priority::Performance,
            network_speed_gbps: 10.0,
            internet_exposed: true,
            remote_access: RemoteAccess::Tunnel,
            threat_protection: ThreatProtection::Advanced,
            ddr: DdrGeneration::Ddr5,
        }),
        "enterprise" => Some(Profile {
            label: "Enterprise NAS".to_string(),
            current_ram_gb: 32.0,
            max_ram_gb: 128.0,
            drive_count: 12,
            drive_capacity_gb: 8000,
            redundancy: RedundancyMode::ParityHigh,
            workload: Workload::Database,
            concurrent_users: 20,
            cpu_cores: 16,
            platform: Platform::TrueNas,
            priority: Priority::Performance,
            network_speed_gbps: 10.0,
            internet_exposed: true,
            remote_access: RemoteAccess::Tunnel,
            threat_protection: ThreatProtection::Advanced,
            ddr: DdrGeneration::Ddr5,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_listed_names_resolve() {
        for name in PRESET_NAMES {
            assert!(get(name).is_some(), "missing preset {}", name);
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(get("datacenter").is_none());
        assert!(get("").is_none());
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(get(" Home ").unwrap().label, "Home NAS");
    }
}
