pub mod profile;
pub mod report;

pub use profile::{
    DdrGeneration, Platform, Priority, Profile, RedundancyMode, RemoteAccess, ThreatProtection,
    Workload,
};
pub use report::{MemoryTier, SavedEntry, SizingReport};
