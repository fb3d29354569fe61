use anyhow::Result;
use ramwise_core::Repository;

use crate::ui::Layout;

const STEPS: [(&str, &str, &str); 3] = [
    (
        "Welcome",
        "This tool calculates your optimal NAS RAM configuration.",
        "Run a preset or pass your own values to get started",
    ),
    (
        "Fill your setup",
        "Provide your hardware specs, storage, and workload details.",
        "Everything recalculates on every run",
    ),
    (
        "View results",
        "Your RAM recommendation appears at the top along with cost and storage details.",
        "Save configurations for future reference",
    ),
];

pub fn handle_tutorial() -> Result<()> {
    let repo = Repository::init()?;
    print_steps(&Layout::new());
    repo.mark_tutorial_complete()?;
    Ok(())
}

/// Shown automatically before the first calculation, then never again.
pub fn show_once(repo: &Repository) -> Result<()> {
    if repo.tutorial_complete() {
        return Ok(());
    }
    print_steps(&Layout::new());
    repo.mark_tutorial_complete()?;
    Ok(())
}

fn print_steps(layout: &Layout) {
    layout.header("GETTING STARTED");
    for (index, (title, text, highlight)) in STEPS.iter().enumerate() {
        layout.section(&format!("{}. {}", index + 1, title));
        println!("  {}", text);
        layout.note(highlight);
    }
    layout.empty();
}
