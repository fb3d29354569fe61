use anyhow::Result;
use ramwise_core::Repository;

use crate::ui::Layout;

pub fn handle_config(get: Option<String>, set: Option<String>, reset: bool) -> Result<()> {
    let repo = Repository::init()?;
    let layout = Layout::new();

    if reset {
        repo.settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .reset()?;
        layout.badge_info("CONFIG", "Settings reset to defaults");
        layout.empty();
        return Ok(());
    }

    if let Some(assignment) = set {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected key=value, got: {}", assignment))?;
        repo.settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .set_key(key.trim(), value.trim())?;
        layout.badge_info("CONFIG", &format!("{} = {}", key.trim(), value.trim()));
        layout.empty();
        return Ok(());
    }

    if let Some(key) = get {
        let value = repo
            .settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get_key(&key)?;
        println!("{}", value);
        return Ok(());
    }

    let settings = repo
        .settings
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .settings
        .clone();
    layout.header("SETTINGS");
    layout.row("tutorial_complete", &settings.tutorial_complete.to_string());
    layout.row(
        "history_display_limit",
        &settings.history_display_limit.to_string(),
    );
    layout.footer("Use 'ramwise config --set key=value' to change a setting");
    layout.empty();
    Ok(())
}
