use serde::{Deserialize, Serialize};

use super::Profile;

/// Market bracket the recommended capacity lands in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum MemoryTier {
    Budget,
    Mid,
    Premium,
}

impl MemoryTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Mid => "mid",
            Self::Premium => "premium",
        }
    }

    pub fn classify(recommended_gb: u32) -> Self {
        if recommended_gb > 32 {
            Self::Premium
        } else if recommended_gb > 8 {
            Self::Mid
        } else {
            Self::Budget
        }
    }
}

/// The engine's answer for one [`Profile`]. Recomputed fresh on every call;
/// nothing in here is ever mutated after construction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SizingReport {
    /// Smallest tier that covers the raw estimate, clamped to the box maximum.
    pub minimum_safe_gb: u32,
    /// Tier covering the estimate plus headroom, clamped to the box maximum.
    pub recommended_gb: u32,
    /// Tier with room for future growth, clamped to the box maximum.
    pub growth_gb: u32,
    /// The unclamped recommended total passed the 128 GB practical ceiling.
    pub exceeds_capacity: bool,
    pub estimated_upgrade_cost_usd: f64,
    pub total_storage_gb: f64,
    pub usable_storage_gb: f64,
    pub memory_tier: MemoryTier,
    pub advisory_notes: Vec<String>,
}

/// A persisted (profile, report) pair as read back from the database.
#[derive(Debug, Clone)]
pub struct SavedEntry {
    pub id: i64,
    pub timestamp: String,
    pub profile: Profile,
    pub report: SizingReport,
}
