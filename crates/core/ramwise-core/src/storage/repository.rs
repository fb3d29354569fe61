use crate::config::SettingsManager;
use crate::error::{AppError, AppResult};
use crate::models::{Profile, SavedEntry, SizingReport};
use std::path::PathBuf;
use std::sync::Mutex;

use super::database::Database;

/// Owns the saved-configuration store and the user settings for one
/// data directory. The engine itself never touches this; callers pass
/// profiles in and decide what to persist.
pub struct Repository {
    pub db: Database,
    pub settings: Mutex<SettingsManager>,
}

impl Repository {
    /// Open the repository in the default data directory
    /// (`~/.ramwise`, overridable via `RAMWISE_HOME`).
    pub fn init() -> AppResult<Self> {
        Self::open(crate::env::get_base_dir()?)
    }

    pub fn open(base_dir: PathBuf) -> AppResult<Self> {
        let db_dir = base_dir.join("db");
        if !db_dir.exists() {
            std::fs::create_dir_all(&db_dir).map_err(|e| AppError::Io {
                path: db_dir.clone(),
                source: e,
            })?;
        }

        let db = Database::new(db_dir.join("ramwise.db"))?;
        let settings = SettingsManager::new(&base_dir)?;

        Ok(Self {
            db,
            settings: Mutex::new(settings),
        })
    }

    /// Persist one calculation. Timestamps are assigned here so the
    /// engine stays a pure function of its input.
    pub fn save_entry(&self, profile: &Profile, report: &SizingReport) -> AppResult<i64> {
        let timestamp = chrono::Local::now().to_rfc3339();
        let id = self.db.insert_entry(&timestamp, profile, report)?;
        log::info!("saved configuration {} ({})", id, profile.label);
        Ok(id)
    }

    /// Saved entries, oldest to newest.
    pub fn history(&self) -> AppResult<Vec<SavedEntry>> {
        self.db.list_entries()
    }

    pub fn latest(&self) -> AppResult<Option<SavedEntry>> {
        self.db.latest_entry()
    }

    pub fn entry(&self, id: i64) -> AppResult<Option<SavedEntry>> {
        self.db.get_entry(id)
    }

    pub fn entry_count(&self) -> AppResult<usize> {
        self.db.entry_count()
    }

    /// Wipe the saved history and compact the database file.
    pub fn clear_history(&self) -> AppResult<usize> {
        let count = self.db.delete_all()?;
        if count > 0 {
            if let Err(e) = self.db.vacuum() {
                log::warn!("VACUUM failed: {}", e);
            }
        }
        Ok(count)
    }

    pub fn tutorial_complete(&self) -> bool {
        self.settings
            .lock()
            .map(|s| s.settings.tutorial_complete)
            .unwrap_or(true)
    }

    pub fn mark_tutorial_complete(&self) -> AppResult<()> {
        self.settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .mark_tutorial_complete()
    }

    pub fn history_display_limit(&self) -> usize {
        self.settings
            .lock()
            .map(|s| s.settings.history_display_limit as usize)
            .unwrap_or(3)
    }
}
