use crate::error::{AppError, AppResult};
use crate::models::{Profile, SavedEntry, SizingReport};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use std::path::PathBuf;

pub struct Database {
    pub pool: Pool<SqliteConnectionManager>,
    pub path: PathBuf,
}

impl Database {
    pub fn new(path: PathBuf) -> AppResult<Self> {
        let manager = SqliteConnectionManager::file(&path);
        let pool = Pool::builder()
            .max_size(10)
            .build(manager)
            .map_err(|e| AppError::Internal(format!("Database pool error: {}", e)))?;

        let conn = pool
            .get()
            .map_err(|e| AppError::Internal(format!("Database connection error: {}", e)))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(AppError::Database)?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(AppError::Database)?;
        conn.pragma_update(None, "busy_timeout", "5000")
            .map_err(AppError::Database)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS saved_configs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                label TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                profile TEXT NOT NULL,
                report TEXT NOT NULL,
                recommended_gb INTEGER NOT NULL
            )",
            [],
        )
        .map_err(AppError::Database)?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_saved_timestamp ON saved_configs(timestamp)",
            [],
        )
        .map_err(AppError::Database)?;

        Ok(Self { pool, path })
    }

    /// Acquires a connection from the pool.
    fn conn(&self) -> r2d2::PooledConnection<SqliteConnectionManager> {
        self.pool.get().expect("Database connection pool exhausted")
    }

    pub fn insert_entry(
        &self,
        timestamp: &str,
        profile: &Profile,
        report: &SizingReport,
    ) -> AppResult<i64> {
        let profile_json = serde_json::to_string(profile)
            .map_err(|e| AppError::Internal(format!("Failed to serialize profile: {}", e)))?;
        let report_json = serde_json::to_string(report)
            .map_err(|e| AppError::Internal(format!("Failed to serialize report: {}", e)))?;

        let conn = self.conn();
        conn.execute(
            "INSERT INTO saved_configs (label, timestamp, profile, report, recommended_gb)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                profile.label,
                timestamp,
                profile_json,
                report_json,
                report.recommended_gb
            ],
        )
        .map_err(AppError::Database)?;
        Ok(conn.last_insert_rowid())
    }

    fn entry_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, String, String, String)> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
    }

    fn decode_entry(raw: (i64, String, String, String)) -> AppResult<SavedEntry> {
        let (id, timestamp, profile_json, report_json) = raw;
        let profile: Profile = serde_json::from_str(&profile_json)
            .map_err(|e| AppError::Internal(format!("Corrupt saved profile {}: {}", id, e)))?;
        let report: SizingReport = serde_json::from_str(&report_json)
            .map_err(|e| AppError::Internal(format!("Corrupt saved report {}: {}", id, e)))?;
        Ok(SavedEntry {
            id,
            timestamp,
            profile,
            report,
        })
    }

    /// All saved entries, oldest first.
    pub fn list_entries(&self) -> AppResult<Vec<SavedEntry>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT id, timestamp, profile, report FROM saved_configs ORDER BY id ASC")
            .map_err(AppError::Database)?;
        let rows = stmt
            .query_map([], Self::entry_from_row)
            .map_err(AppError::Database)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(Self::decode_entry(row.map_err(AppError::Database)?)?);
        }
        Ok(entries)
    }

    pub fn get_entry(&self, id: i64) -> AppResult<Option<SavedEntry>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT id, timestamp, profile, report FROM saved_configs WHERE id = ?1")
            .map_err(AppError::Database)?;
        let mut rows = stmt
            .query_map([id], Self::entry_from_row)
            .map_err(AppError::Database)?;

        match rows.next() {
            Some(row) => Ok(Some(Self::decode_entry(row.map_err(AppError::Database)?)?)),
            None => Ok(None),
        }
    }

    pub fn latest_entry(&self) -> AppResult<Option<SavedEntry>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare(
                "SELECT id, timestamp, profile, report FROM saved_configs
                 ORDER BY id DESC LIMIT 1",
            )
            .map_err(AppError::Database)?;
        let mut rows = stmt
            .query_map([], Self::entry_from_row)
            .map_err(AppError::Database)?;

        match rows.next() {
            Some(row) => Ok(Some(Self::decode_entry(row.map_err(AppError::Database)?)?)),
            None => Ok(None),
        }
    }

    pub fn entry_count(&self) -> AppResult<usize> {
        let conn = self.conn();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM saved_configs", [], |row| row.get(0))
            .map_err(AppError::Database)?;
        Ok(count as usize)
    }

    pub fn delete_all(&self) -> AppResult<usize> {
        let conn = self.conn();
        let count = conn
            .execute("DELETE FROM saved_configs", [])
            .map_err(AppError::Database)?;
        Ok(count)
    }

    pub fn vacuum(&self) -> AppResult<()> {
        let conn = self.conn();
        conn.execute("VACUUM", []).map_err(AppError::Database)?;
        Ok(())
    }
}
