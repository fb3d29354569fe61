use serde::{Deserialize, Serialize};

/// Data-protection layout across drives. Maps onto RAID 0/1/5/6/10.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RedundancyMode {
    None,
    Mirror,
    ParityLow,
    ParityHigh,
    StripedMirror,
}

impl Default for RedundancyMode {
    fn default() -> Self {
        Self::None
    }
}

impl RedundancyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "RAID 0",
            Self::Mirror => "RAID 1",
            Self::ParityLow => "RAID 5",
            Self::ParityHigh => "RAID 6",
            Self::StripedMirror => "RAID 10",
        }
    }

    /// Parse user-facing text. Unknown text falls back to `None`
    /// (full capacity, no overhead) rather than failing.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "raid0" | "none" | "striped" => Self::None,
            "raid1" | "mirror" => Self::Mirror,
            "raid5" | "parity" | "parity-low" => Self::ParityLow,
            "raid6" | "parity-high" => Self::ParityHigh,
            "raid10" | "striped-mirror" => Self::StripedMirror,
            _ => Self::default(),
        }
    }

    /// Fixed memory surcharge in GB for running this layout.
    pub fn overhead_gb(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Mirror => 0.5,
            Self::ParityLow => 1.0,
            Self::ParityHigh => 1.5,
            Self::StripedMirror => 1.0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Backup,
    Media,
    Database,
    Virtualization,
    Mixed,
}

impl Default for Workload {
    fn default() -> Self {
        Self::Backup
    }
}

impl Workload {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backup => "backup",
            Self::Media => "media",
            Self::Database => "database",
            Self::Virtualization => "vm",
            Self::Mixed => "mixed",
        }
    }

    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "backup" => Self::Backup,
            "media" => Self::Media,
            "database" | "db" => Self::Database,
            "vm" | "virtualization" => Self::Virtualization,
            "mixed" => Self::Mixed,
            _ => Self::default(),
        }
    }

    /// Baseline working-set footprint in GB.
    pub fn footprint_gb(&self) -> f64 {
        match self {
            Self::Backup => 1.0,
            Self::Media => 2.0,
            Self::Database => 2.0,
            Self::Virtualization => 2.0,
            Self::Mixed => 2.0,
        }
    }
}

/// Vendor OS running on the box. Determines the base OS footprint.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Synology,
    OpenMediaVault,
    Unraid,
    TrueNas,
    Ubuntu,
    Custom,
}

impl Default for Platform {
    fn default() -> Self {
        Self::Synology
    }
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Synology => "Synology DSM",
            Self::OpenMediaVault => "OpenMediaVault",
            Self::Unraid => "Unraid",
            Self::TrueNas => "TrueNAS",
            Self::Ubuntu => "Ubuntu Server",
            Self::Custom => "Custom Linux",
        }
    }

    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "synology" | "dsm" => Self::Synology,
            "openmediavault" | "omv" => Self::OpenMediaVault,
            "unraid" => Self::Unraid,
            "truenas" => Self::TrueNas,
            "ubuntu" => Self::Ubuntu,
            "custom" => Self::Custom,
            _ => Self::default(),
        }
    }

    /// Memory the OS itself claims before any services run, in GB.
    pub fn base_footprint_gb(&self) -> f64 {
        match self {
            Self::Synology => 2.5,
            Self::OpenMediaVault => 2.0,
            Self::Unraid => 3.0,
            Self::TrueNas => 6.0,
            Self::Ubuntu => 2.0,
            Self::Custom => 2.0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Cost,
    Balanced,
    Performance,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Balanced
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Balanced => "balanced",
            Self::Performance => "performance",
        }
    }

    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "cost" => Self::Cost,
            "balanced" => Self::Balanced,
            "performance" => Self::Performance,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAccess {
    None,
    PortForward,
    Tunnel,
}

impl Default for RemoteAccess {
    fn default() -> Self {
        Self::None
    }
}

impl RemoteAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PortForward => "port-forward",
            Self::Tunnel => "tunnel",
        }
    }

    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "port-forward" | "portforward" => Self::PortForward,
            "tunnel" | "vpn" => Self::Tunnel,
            _ => Self::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn is_tunnel(&self) -> bool {
        matches!(self, Self::Tunnel)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThreatProtection {
    None,
    Basic,
    Advanced,
}

impl Default for ThreatProtection {
    fn default() -> Self {
        Self::None
    }
}

impl ThreatProtection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Advanced => "advanced",
        }
    }

    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "basic" => Self::Basic,
            "advanced" => Self::Advanced,
            _ => Self::default(),
        }
    }
}

/// Memory generation installed in the box. Drives the price estimate.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum DdrGeneration {
    Ddr3,
    Ddr4,
    Ddr5,
}

impl Default for DdrGeneration {
    fn default() -> Self {
        Self::Ddr4
    }
}

impl DdrGeneration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ddr3 => "DDR3",
            Self::Ddr4 => "DDR4",
            Self::Ddr5 => "DDR5",
        }
    }

    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "ddr3" => Self::Ddr3,
            "ddr4" => Self::Ddr4,
            "ddr5" => Self::Ddr5,
            _ => Self::default(),
        }
    }

    /// Street price in USD for a 16 GB module of this generation.
    pub fn price_per_16gb(&self) -> f64 {
        match self {
            Self::Ddr3 => 40.0,
            Self::Ddr4 => 60.0,
            Self::Ddr5 => 100.0,
        }
    }
}

/// One box worth of hardware and workload facts. Immutable per calculation;
/// the engine reads it and returns a fresh [`crate::models::SizingReport`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Profile {
    /// Free-text model name, only used for display in saved history.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub current_ram_gb: f64,
    #[serde(default)]
    pub max_ram_gb: f64,
    #[serde(default)]
    pub drive_count: u32,
    #[serde(default)]
    pub drive_capacity_gb: u32,
    #[serde(default)]
    pub redundancy: RedundancyMode,
    #[serde(default)]
    pub workload: Workload,
    #[serde(default = "default_concurrent_users")]
    pub concurrent_users: u32,
    #[serde(default = "default_cpu_cores")]
    pub cpu_cores: u32,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub network_speed_gbps: f64,
    #[serde(default)]
    pub internet_exposed: bool,
    #[serde(default)]
    pub remote_access: RemoteAccess,
    #[serde(default)]
    pub threat_protection: ThreatProtection,
    #[serde(default)]
    pub ddr: DdrGeneration,
}

fn default_concurrent_users() -> u32 {
    1
}

fn default_cpu_cores() -> u32 {
    1
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            label: String::new(),
            current_ram_gb: 0.0,
            max_ram_gb: 0.0,
            drive_count: 0,
            drive_capacity_gb: 0,
            redundancy: RedundancyMode::default(),
            workload: Workload::default(),
            concurrent_users: default_concurrent_users(),
            cpu_cores: default_cpu_cores(),
            platform: Platform::default(),
            priority: Priority::default(),
            network_speed_gbps: 0.0,
            internet_exposed: false,
            remote_access: RemoteAccess::default(),
            threat_protection: ThreatProtection::default(),
            ddr: DdrGeneration::default(),
        }
    }
}

impl Profile {
    /// Returns a copy with degenerate numerics coerced into range:
    /// negative capacities clamp to 0, user and core counts floor to 1.
    /// Keeps the engine total over arbitrary input.
    pub fn normalized(&self) -> Profile {
        let mut p = self.clone();
        p.current_ram_gb = p.current_ram_gb.max(0.0);
        p.max_ram_gb = p.max_ram_gb.max(0.0);
        p.network_speed_gbps = p.network_speed_gbps.max(0.0);
        p.concurrent_users = p.concurrent_users.max(1);
        p.cpu_cores = p.cpu_cores.max(1);
        p
    }
}
