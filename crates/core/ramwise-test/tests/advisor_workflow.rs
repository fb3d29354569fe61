use ramwise_core::models::MemoryTier;
use ramwise_core::{Repository, presets, sizing};
use tempfile::TempDir;

#[test]
fn every_preset_produces_ordered_clamped_tiers() {
    for name in presets::PRESET_NAMES {
        let profile = presets::get(name).unwrap();
        let report = sizing::compute_sizing(&profile);

        assert!(
            report.minimum_safe_gb <= report.recommended_gb,
            "{}: min > recommended",
            name
        );
        assert!(
            report.recommended_gb <= report.growth_gb,
            "{}: recommended > growth",
            name
        );
        assert!(
            report.growth_gb as f64 <= profile.max_ram_gb,
            "{}: growth past the board max",
            name
        );
        assert!(!report.advisory_notes.is_empty(), "{}: no notes", name);
    }
}

#[test]
fn home_preset_sizes_like_a_small_box() {
    let profile = presets::get("home").unwrap();
    let report = sizing::compute_sizing(&profile);

    assert_eq!(report.minimum_safe_gb, 8);
    assert_eq!(report.recommended_gb, 8);
    assert_eq!(report.growth_gb, 12);
    assert!(!report.exceeds_capacity);
    assert_eq!(report.total_storage_gb, 4000.0);
    assert_eq!(report.usable_storage_gb, 2000.0);
    // 4 GB installed, 4 GB short, DDR4 at $60 per 16 GB block.
    assert_eq!(report.estimated_upgrade_cost_usd, 15.0);
    assert_eq!(report.memory_tier, MemoryTier::Budget);
}

#[test]
fn enterprise_preset_hits_the_large_pool_rules() {
    let profile = presets::get("enterprise").unwrap();
    let report = sizing::compute_sizing(&profile);

    assert_eq!(report.total_storage_gb, 96_000.0);
    assert_eq!(report.usable_storage_gb, 80_000.0);
    assert_eq!(report.recommended_gb, 32);
    // 32 GB already installed.
    assert_eq!(report.estimated_upgrade_cost_usd, 0.0);
    assert!(
        report
            .advisory_notes
            .iter()
            .any(|n| n.contains("Very large storage"))
    );
    assert!(
        report
            .advisory_notes
            .iter()
            .any(|n| n.contains("High concurrent users"))
    );
}

#[test]
fn saved_entries_recompute_to_the_same_report() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::open(dir.path().join(".ramwise")).unwrap();

    for name in presets::PRESET_NAMES {
        let profile = presets::get(name).unwrap();
        let report = sizing::compute_sizing(&profile);
        repo.save_entry(&profile, &report).unwrap();
    }

    for entry in repo.history().unwrap() {
        let recomputed = sizing::compute_sizing(&entry.profile);
        assert_eq!(recomputed, entry.report, "{} drifted", entry.profile.label);
    }
}
