//! Terminal rendering for reports and lists.

use crossterm::style::Stylize;
use ramwise_core::models::{Profile, SizingReport};

const RULE_WIDTH: usize = 48;
const BAR_WIDTH: usize = 30;

/// Format a GB figure the way people shop for it: whole GB below a
/// terabyte, one-decimal TB above.
pub fn format_capacity(gb: f64) -> String {
    if gb >= 1000.0 {
        format!("{:.1}TB", gb / 1024.0)
    } else {
        format!("{}GB", gb.round() as i64)
    }
}

/// Installed-vs-needed capacity bar against the board maximum.
pub fn capacity_bar(current_gb: f64, additional_gb: f64, max_gb: f64) -> String {
    if max_gb <= 0.0 {
        return "░".repeat(BAR_WIDTH);
    }
    let current = ((current_gb / max_gb) * BAR_WIDTH as f64).round() as usize;
    let current = current.min(BAR_WIDTH);
    let additional = ((additional_gb / max_gb) * BAR_WIDTH as f64).round() as usize;
    let additional = additional.min(BAR_WIDTH - current);
    format!(
        "{}{}{}",
        "█".repeat(current),
        "▒".repeat(additional),
        "░".repeat(BAR_WIDTH - current - additional)
    )
}

pub struct Layout;

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    pub fn new() -> Self {
        Self
    }

    pub fn header(&self, title: &str) {
        println!();
        println!("  {}", title.bold().magenta());
        println!("  {}", "─".repeat(RULE_WIDTH).dark_grey());
    }

    pub fn section(&self, title: &str) {
        println!();
        println!("  {}", title.bold().cyan());
    }

    pub fn row(&self, key: &str, value: &str) {
        println!("  {} {}", format!("{:<18}", key).dark_grey(), value);
    }

    pub fn note(&self, text: &str) {
        println!("   {} {}", "•".cyan(), text);
    }

    pub fn badge_info(&self, tag: &str, text: &str) {
        println!();
        println!("  {} {}", format!(" {} ", tag).black().on_cyan(), text);
    }

    pub fn empty(&self) {
        println!();
    }

    pub fn footer(&self, text: &str) {
        println!();
        println!("  {}", text.dark_grey());
    }
}

pub fn render_report(layout: &Layout, profile: &Profile, report: &SizingReport) {
    layout.header("MEMORY RECOMMENDATION");

    let headline = if report.exceeds_capacity {
        format!(
            ">{}",
            format_capacity(ramwise_core::sizing::PRACTICAL_CEILING_GB)
        )
    } else {
        format_capacity(report.recommended_gb as f64)
    };
    let additional_gb = (report.recommended_gb as f64 - profile.current_ram_gb).max(0.0);
    let verdict = if report.exceeds_capacity {
        "Exceeds typical NAS capacity".to_string()
    } else if additional_gb > 0.0 {
        format!("Upgrade by {}", format_capacity(additional_gb))
    } else {
        "Your current RAM is sufficient".to_string()
    };
    println!();
    println!("  {}  {}", headline.bold().green(), verdict);

    layout.section("Tiers");
    layout.row(
        "Minimum safe",
        &format_capacity(report.minimum_safe_gb as f64),
    );
    layout.row("Recommended", &format_capacity(report.recommended_gb as f64));
    layout.row("For growth", &format_capacity(report.growth_gb as f64));
    layout.row("Market tier", report.memory_tier.as_str());

    if profile.max_ram_gb > 0.0 {
        layout.section("Capacity");
        println!(
            "  {}  {} installed, +{} needed, {} max",
            capacity_bar(profile.current_ram_gb, additional_gb, profile.max_ram_gb),
            format_capacity(profile.current_ram_gb),
            format_capacity(additional_gb),
            format_capacity(profile.max_ram_gb)
        );
    }

    layout.section("Summary");
    layout.row(
        "Current memory",
        &format!(
            "{} / {}",
            format_capacity(profile.current_ram_gb),
            format_capacity(profile.max_ram_gb)
        ),
    );
    layout.row("Total storage", &format_capacity(report.total_storage_gb));
    layout.row("Usable storage", &format_capacity(report.usable_storage_gb));
    layout.row(
        "Upgrade cost",
        &format!("${:.2}", report.estimated_upgrade_cost_usd),
    );

    layout.section("Notes");
    for note in &report.advisory_notes {
        layout.note(note);
    }
}
