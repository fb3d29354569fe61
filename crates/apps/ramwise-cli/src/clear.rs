use anyhow::Result;
use ramwise_core::Repository;
use std::io::Write;

use crate::ui::Layout;

pub fn handle_clear(yes: bool) -> Result<()> {
    let repo = Repository::init()?;
    let layout = Layout::new();

    let count = repo.entry_count()?;
    if count == 0 {
        layout.badge_info("CLEAR", "No saved configurations to delete");
        layout.empty();
        return Ok(());
    }

    if !yes && !confirm(&format!("Delete all {} saved configurations? [y/N] ", count))? {
        layout.badge_info("CLEAR", "Nothing deleted");
        layout.empty();
        return Ok(());
    }

    let deleted = repo.clear_history()?;
    layout.badge_info("CLEAR", &format!("Deleted {} saved configurations", deleted));
    layout.empty();
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
