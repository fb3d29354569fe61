use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Whether the first-run walkthrough has already been shown.
    pub tutorial_complete: bool,
    /// How many recent saved configurations the history summary shows.
    #[serde(default = "default_history_display_limit")]
    pub history_display_limit: u64,
}

fn default_history_display_limit() -> u64 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tutorial_complete: false,
            history_display_limit: default_history_display_limit(),
        }
    }
}

pub struct SettingsManager {
    settings_path: PathBuf,
    pub settings: Settings,
}

impl SettingsManager {
    pub fn new(base_dir: &std::path::Path) -> AppResult<Self> {
        let settings_path = base_dir.join("settings.toml");
        let settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path).map_err(AppError::IoGeneric)?;
            toml::from_str(&content).unwrap_or_default()
        } else {
            Settings::default()
        };

        // Auto-save default if missing
        if !settings_path.exists() {
            if let Err(e) = Self::save_to_path(&settings, &settings_path) {
                log::warn!("failed to save default settings: {}", e);
            }
        }

        Ok(Self {
            settings_path,
            settings,
        })
    }

    pub fn save(&self) -> AppResult<()> {
        Self::save_to_path(&self.settings, &self.settings_path)
    }

    fn save_to_path(settings: &Settings, path: &PathBuf) -> AppResult<()> {
        let content =
            toml::to_string_pretty(settings).map_err(|e| AppError::Config(e.to_string()))?;

        // Atomic write: write to tempfile then rename to prevent corruption on crash
        let parent = path.parent().unwrap_or(std::path::Path::new("."));
        let temp = tempfile::NamedTempFile::new_in(parent).map_err(AppError::IoGeneric)?;
        std::fs::write(temp.path(), &content).map_err(AppError::IoGeneric)?;
        temp.persist(path)
            .map_err(|e| AppError::IoGeneric(e.error))?;
        Ok(())
    }

    pub fn mark_tutorial_complete(&mut self) -> AppResult<()> {
        self.settings.tutorial_complete = true;
        self.save()
    }

    pub fn set_history_display_limit(&mut self, limit: u64) -> AppResult<()> {
        self.settings.history_display_limit = limit;
        self.save()
    }

    /// String-keyed access for the `config` CLI command.
    pub fn get_key(&self, key: &str) -> AppResult<String> {
        match key {
            "tutorial_complete" => Ok(self.settings.tutorial_complete.to_string()),
            "history_display_limit" => Ok(self.settings.history_display_limit.to_string()),
            _ => Err(AppError::NotFound(format!("unknown setting: {}", key))),
        }
    }

    pub fn set_key(&mut self, key: &str, value: &str) -> AppResult<()> {
        match key {
            "tutorial_complete" => {
                self.settings.tutorial_complete = value
                    .parse()
                    .map_err(|_| AppError::Config(format!("expected true/false, got: {}", value)))?;
            }
            "history_display_limit" => {
                self.settings.history_display_limit = value
                    .parse()
                    .map_err(|_| AppError::Config(format!("expected a number, got: {}", value)))?;
            }
            _ => return Err(AppError::NotFound(format!("unknown setting: {}", key))),
        }
        self.save()
    }

    pub fn reset(&mut self) -> AppResult<()> {
        self.settings = Settings::default();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_settings_created_when_missing() {
        let dir = TempDir::new().unwrap();
        let manager = SettingsManager::new(dir.path()).unwrap();
        assert!(!manager.settings.tutorial_complete);
        assert_eq!(manager.settings.history_display_limit, 3);
        assert!(dir.path().join("settings.toml").exists());
    }

    #[test]
    fn settings_persist_across_loads() {
        let dir = TempDir::new().unwrap();
        {
            let mut manager = SettingsManager::new(dir.path()).unwrap();
            manager.mark_tutorial_complete().unwrap();
            manager.set_history_display_limit(10).unwrap();
        }
        let manager = SettingsManager::new(dir.path()).unwrap();
        assert!(manager.settings.tutorial_complete);
        assert_eq!(manager.settings.history_display_limit, 10);
    }

    #[test]
    fn test_string_keyed_access() {
        let dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(dir.path()).unwrap();
        manager.set_key("tutorial_complete", "true").unwrap();
        assert_eq!(manager.get_key("tutorial_complete").unwrap(), "true");
        assert!(manager.get_key("no_such_key").is_err());
        assert!(manager.set_key("history_display_limit", "abc").is_err());
    }
}
