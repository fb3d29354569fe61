//! Capacity-estimation engine.
//!
//! Pure, synchronous and total: every [`Profile`] maps to a [`SizingReport`],
//! however degenerate the input. Degenerate numerics are normalized rather
//! than rejected, so there is no failure mode here at all.

use crate::models::{MemoryTier, Profile, RedundancyMode, SizingReport, ThreatProtection, Workload};

/// Purchasable module sizes in GB, ascending. Estimates are rounded up to
/// the next rung rather than reported as arbitrary reals.
pub const TIER_LADDER: [u32; 21] = [
    1, 2, 4, 6, 8, 12, 16, 20, 24, 32, 40, 56, 64, 70, 80, 90, 120, 128, 256, 512, 1024,
];

/// Ceiling above which consumer NAS boards stop being realistic.
pub const PRACTICAL_CEILING_GB: f64 = 128.0;

/// Fixed allowance for guest allocations on virtualization hosts, in GB.
const GUEST_OVERHEAD_GB: f64 = 10.0;

/// Per-drive controller/cache overhead, in GB.
const PER_DRIVE_OVERHEAD_GB: f64 = 0.4;

/// Per-user session footprint, in GB. Deliberately uncapped.
const PER_USER_GB: f64 = 0.25;

/// Capacity left for data after redundancy overhead.
///
/// With no drives there is no capacity, whatever the layout. No clamping
/// to zero is performed beyond that: `ParityHigh` needs at least 2 drives
/// and `ParityLow` at least 1, otherwise the result goes negative and that
/// is the caller's error, not silently corrected here.
pub fn usable_capacity(total_gb: f64, drive_count: u32, redundancy: RedundancyMode) -> f64 {
    if drive_count == 0 {
        return 0.0;
    }
    let drive_size = total_gb / drive_count as f64;
    match redundancy {
        RedundancyMode::None => total_gb,
        RedundancyMode::Mirror => drive_size,
        RedundancyMode::ParityLow => drive_size * (drive_count as f64 - 1.0),
        RedundancyMode::ParityHigh => drive_size * (drive_count as f64 - 2.0),
        RedundancyMode::StripedMirror => (drive_size * drive_count as f64) / 2.0,
    }
}

/// Raw, pre-tier memory need in GB: the sum of five independent
/// contributions. Nothing here interacts beyond addition.
pub fn estimate_memory_load(profile: &Profile) -> f64 {
    let base = profile.platform.base_footprint_gb();

    let mut storage = profile.drive_count as f64 * PER_DRIVE_OVERHEAD_GB
        + profile.redundancy.overhead_gb();
    let total_storage = profile.drive_count as f64 * profile.drive_capacity_gb as f64;
    let usable = usable_capacity(total_storage, profile.drive_count, profile.redundancy);
    if usable > 20_000.0 {
        // Roughly one extra GB per 10 TB beyond the first 20 TB of pool.
        let excess_tb = ((usable - 20_000.0) / 1_000.0).floor();
        storage += (excess_tb / 10.0).ceil();
    }

    let mut workload = profile.workload.footprint_gb();
    if profile.workload == Workload::Virtualization {
        workload += GUEST_OVERHEAD_GB;
    }

    let users = profile.concurrent_users as f64 * PER_USER_GB;

    let mut security = 0.0;
    if profile.internet_exposed {
        security += 0.5;
    }
    if profile.remote_access.is_enabled() {
        security += 0.5;
    }
    security += match profile.threat_protection {
        ThreatProtection::None => 0.0,
        ThreatProtection::Basic => 0.5,
        ThreatProtection::Advanced => 1.0,
    };

    base + storage + workload + users + security
}

/// Smallest ladder rung that covers `value`. Values past the top of the
/// ladder return the top rung; the caller flags the overflow separately
/// via the 128 GB practical ceiling.
pub fn bucket_to_tier(value: f64) -> u32 {
    for tier in TIER_LADDER {
        if value <= tier as f64 {
            return tier;
        }
    }
    TIER_LADDER[TIER_LADDER.len() - 1]
}

fn clamp_to_max(tier: u32, max_ram_gb: f64) -> u32 {
    (tier as f64).min(max_ram_gb) as u32
}

/// Run the full estimate for one profile.
pub fn compute_sizing(profile: &Profile) -> SizingReport {
    let profile = profile.normalized();

    let raw = estimate_memory_load(&profile);

    let minimum_safe_gb = clamp_to_max(bucket_to_tier(raw), profile.max_ram_gb);

    // 15% headroom, but never less than one full unit above the raw need.
    let mut recommended_raw = raw * 1.15;
    if recommended_raw - raw < 1.0 {
        recommended_raw = raw + 1.0;
    }
    let exceeds_capacity = recommended_raw > PRACTICAL_CEILING_GB;
    let recommended_gb = clamp_to_max(bucket_to_tier(recommended_raw), profile.max_ram_gb);

    let growth_raw = recommended_raw * 1.3;
    let growth_gb = clamp_to_max(bucket_to_tier(growth_raw), profile.max_ram_gb);

    let needed_gb = (recommended_gb as f64 - profile.current_ram_gb).max(0.0);
    let estimated_upgrade_cost_usd = needed_gb / 16.0 * profile.ddr.price_per_16gb();

    let total_storage_gb = profile.drive_count as f64 * profile.drive_capacity_gb as f64;
    let usable_storage_gb =
        usable_capacity(total_storage_gb, profile.drive_count, profile.redundancy);

    let advisory_notes = advisory_notes(&profile, exceeds_capacity, usable_storage_gb);

    log::debug!(
        "sizing: raw={:.2} recommended_raw={:.2} tiers={}/{}/{}",
        raw,
        recommended_raw,
        minimum_safe_gb,
        recommended_gb,
        growth_gb
    );

    SizingReport {
        minimum_safe_gb,
        recommended_gb,
        growth_gb,
        exceeds_capacity,
        estimated_upgrade_cost_usd,
        total_storage_gb,
        usable_storage_gb,
        memory_tier: MemoryTier::classify(recommended_gb),
        advisory_notes,
    }
}

/// Independent predicate checks in fixed order. Notes are never
/// deduplicated; when nothing fires the single well-balanced note is
/// emitted instead.
fn advisory_notes(profile: &Profile, exceeds_capacity: bool, usable_storage_gb: f64) -> Vec<String> {
    let mut notes = Vec::new();

    if exceeds_capacity {
        notes.push("More RAM needed than the board can handle".to_string());
    }
    if profile.concurrent_users > 10 {
        notes.push("High concurrent users: verify this count is accurate".to_string());
    }
    if profile.workload == Workload::Virtualization {
        notes.push("VM host: +10GB overhead applied for guest allocations".to_string());
    }
    if profile.redundancy == RedundancyMode::None {
        notes.push("RAID 0 has no redundancy: data loss if any drive fails".to_string());
    }
    if profile.workload == Workload::Media && profile.remote_access.is_tunnel() {
        notes.push("Transcoding over VPN will be slower: consider balanced priority".to_string());
    }
    if usable_storage_gb > 50_000.0 {
        notes.push("Very large storage: monitor pool health regularly".to_string());
    }
    if profile.threat_protection == ThreatProtection::Advanced
        && profile.workload == Workload::Backup
    {
        notes.push("Advanced scanning may be overkill for pure backup storage".to_string());
    }

    if notes.is_empty() {
        notes.push("Configuration is conservative and well-balanced".to_string());
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DdrGeneration, RemoteAccess};

    fn base_profile() -> Profile {
        Profile {
            max_ram_gb: 1024.0,
            ..Profile::default()
        }
    }

    #[test]
    fn no_drives_means_no_capacity() {
        for mode in [
            RedundancyMode::None,
            RedundancyMode::Mirror,
            RedundancyMode::ParityLow,
            RedundancyMode::ParityHigh,
            RedundancyMode::StripedMirror,
        ] {
            assert_eq!(usable_capacity(8000.0, 0, mode), 0.0);
        }
    }

    #[test]
    fn mirrored_pair_keeps_one_drive() {
        // 2 x 2000 GB mirrored
        let total = 2.0 * 2000.0;
        assert_eq!(total, 4000.0);
        assert_eq!(usable_capacity(total, 2, RedundancyMode::Mirror), 2000.0);
    }

    #[test]
    fn parity_layouts_lose_parity_drives() {
        assert_eq!(usable_capacity(8000.0, 4, RedundancyMode::ParityLow), 6000.0);
        assert_eq!(usable_capacity(8000.0, 4, RedundancyMode::ParityHigh), 4000.0);
        assert_eq!(usable_capacity(8000.0, 4, RedundancyMode::StripedMirror), 4000.0);
        assert_eq!(usable_capacity(8000.0, 4, RedundancyMode::None), 8000.0);
    }

    #[test]
    fn bucket_always_returns_ladder_member() {
        for v in [0.0, 0.3, 1.0, 5.1, 17.0, 127.9, 500.0, 1023.0, 4096.0] {
            let tier = bucket_to_tier(v);
            assert!(TIER_LADDER.contains(&tier), "{} -> {}", v, tier);
        }
        assert_eq!(bucket_to_tier(4096.0), 1024);
        assert_eq!(bucket_to_tier(0.0), 1);
        assert_eq!(bucket_to_tier(9.0), 12);
    }

    #[test]
    fn tiers_are_ordered_and_clamped() {
        let mut p = base_profile();
        p.drive_count = 12;
        p.drive_capacity_gb = 8000;
        p.redundancy = RedundancyMode::ParityHigh;
        p.workload = Workload::Database;
        p.concurrent_users = 20;
        p.max_ram_gb = 128.0;

        let report = compute_sizing(&p);
        assert!(report.minimum_safe_gb <= report.recommended_gb);
        assert!(report.recommended_gb <= report.growth_gb);
        assert!(report.growth_gb as f64 <= p.max_ram_gb);
    }

    #[test]
    fn compute_sizing_is_idempotent() {
        let mut p = base_profile();
        p.drive_count = 4;
        p.drive_capacity_gb = 4000;
        p.redundancy = RedundancyMode::ParityLow;
        p.workload = Workload::Media;
        p.concurrent_users = 8;

        assert_eq!(compute_sizing(&p), compute_sizing(&p));
    }

    #[test]
    fn more_users_never_lowers_recommendation() {
        let mut prev = 0;
        for users in 1..200 {
            let mut p = base_profile();
            p.concurrent_users = users;
            let report = compute_sizing(&p);
            assert!(
                report.recommended_gb >= prev,
                "users={} dropped {} -> {}",
                users,
                prev,
                report.recommended_gb
            );
            prev = report.recommended_gb;
        }
    }

    #[test]
    fn virtualization_costs_at_least_one_tier_over_backup() {
        let mut backup = base_profile();
        backup.workload = Workload::Backup;
        let mut vm = base_profile();
        vm.workload = Workload::Virtualization;

        let backup_report = compute_sizing(&backup);
        let vm_report = compute_sizing(&vm);
        assert!(vm_report.recommended_gb > backup_report.recommended_gb);
    }

    #[test]
    fn raid0_always_warns_about_redundancy() {
        let mut p = base_profile();
        p.redundancy = RedundancyMode::None;
        p.drive_count = 3;
        p.drive_capacity_gb = 1000;

        let report = compute_sizing(&p);
        assert!(
            report
                .advisory_notes
                .iter()
                .any(|n| n.contains("no redundancy"))
        );
    }

    #[test]
    fn high_user_count_always_warns() {
        let mut p = base_profile();
        p.concurrent_users = 15;

        let report = compute_sizing(&p);
        assert!(
            report
                .advisory_notes
                .iter()
                .any(|n| n.contains("High concurrent users"))
        );
    }

    #[test]
    fn sufficient_current_ram_costs_nothing() {
        let mut p = base_profile();
        p.current_ram_gb = 64.0;
        p.drive_count = 2;
        p.drive_capacity_gb = 2000;
        p.redundancy = RedundancyMode::Mirror;

        let report = compute_sizing(&p);
        assert!(report.recommended_gb as f64 <= p.current_ram_gb);
        assert_eq!(report.estimated_upgrade_cost_usd, 0.0);
    }

    #[test]
    fn ceiling_flag_survives_the_max_ram_clamp() {
        // Enough users to push the raw estimate well past 128 GB.
        let mut p = base_profile();
        p.concurrent_users = 600;
        p.max_ram_gb = 8.0;

        let report = compute_sizing(&p);
        assert!(report.exceeds_capacity);
        assert!(report.recommended_gb <= 8);
    }

    #[test]
    fn upgrade_cost_scales_with_generation() {
        let mut p = base_profile();
        p.drive_count = 4;
        p.drive_capacity_gb = 4000;
        p.redundancy = RedundancyMode::ParityLow;
        p.workload = Workload::Virtualization;
        p.ddr = DdrGeneration::Ddr3;
        let ddr3 = compute_sizing(&p);
        p.ddr = DdrGeneration::Ddr5;
        let ddr5 = compute_sizing(&p);

        assert_eq!(ddr3.recommended_gb, ddr5.recommended_gb);
        assert!(ddr5.estimated_upgrade_cost_usd > ddr3.estimated_upgrade_cost_usd);
        let needed = ddr3.recommended_gb as f64;
        assert_eq!(ddr3.estimated_upgrade_cost_usd, needed / 16.0 * 40.0);
        assert_eq!(ddr5.estimated_upgrade_cost_usd, needed / 16.0 * 100.0);
    }

    #[test]
    fn large_pool_adds_overhead_and_health_note() {
        // 12 x 8000 GB in RAID 6: 80 TB usable.
        let mut p = base_profile();
        p.drive_count = 12;
        p.drive_capacity_gb = 8000;
        p.redundancy = RedundancyMode::ParityHigh;

        let report = compute_sizing(&p);
        assert_eq!(report.total_storage_gb, 96_000.0);
        assert_eq!(report.usable_storage_gb, 80_000.0);
        assert!(
            report
                .advisory_notes
                .iter()
                .any(|n| n.contains("Very large storage"))
        );

        // 60 TB of excess over the 20 TB floor -> +6 GB surcharge.
        let mut small = p.clone();
        small.drive_capacity_gb = 2000;
        let small_usable =
            usable_capacity(12.0 * 2000.0, 12, RedundancyMode::ParityHigh);
        assert!(small_usable <= 20_000.0);
        let delta = estimate_memory_load(&p) - estimate_memory_load(&small);
        assert!((delta - 6.0).abs() < 1e-9, "surcharge was {}", delta);
    }

    #[test]
    fn well_balanced_note_when_nothing_fires() {
        let mut p = base_profile();
        p.drive_count = 2;
        p.drive_capacity_gb = 2000;
        p.redundancy = RedundancyMode::Mirror;
        p.concurrent_users = 3;

        let report = compute_sizing(&p);
        assert_eq!(report.advisory_notes.len(), 1);
        assert!(report.advisory_notes[0].contains("well-balanced"));
    }

    #[test]
    fn media_over_tunnel_warns_about_transcoding() {
        let mut p = base_profile();
        p.workload = Workload::Media;
        p.remote_access = RemoteAccess::Tunnel;
        p.drive_count = 2;
        p.drive_capacity_gb = 2000;
        p.redundancy = RedundancyMode::Mirror;

        let report = compute_sizing(&p);
        assert!(
            report
                .advisory_notes
                .iter()
                .any(|n| n.contains("Transcoding over VPN"))
        );
    }

    #[test]
    fn headroom_is_at_least_one_unit() {
        // Tiny raw totals would otherwise get under 1 GB of headroom.
        let p = base_profile();
        let raw = estimate_memory_load(&p.normalized());
        assert!(raw < 7.0);
        let report = compute_sizing(&p);
        assert!(report.recommended_gb as f64 >= raw + 1.0 || report.recommended_gb >= bucket_to_tier(raw + 1.0));
    }
}
