//! Analysis history store.
//!
//! Append-only SQLite record of past analyses. Transient database failures
//! on insert are retried a few times before surfacing.

use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use serde::Serialize;

use crate::constants;

// ============================================================================
// CONSTANTS
// ============================================================================

const MAX_TITLE_LEN: usize = 500;
const MAX_CONTENT_LEN: usize = 1000;
const MAX_URL_LEN: usize = 1000;

/// Insert attempts before giving up.
const MAX_RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(250);

const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS article_history (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT,
        content TEXT,
        url TEXT,
        is_fake INTEGER NOT NULL,
        confidence_score REAL NOT NULL,
        source_credibility_score REAL,
        analysis_date TEXT NOT NULL
    )";

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone)]
pub enum HistoryError {
    /// Database file could not be opened or initialized
    Open { message: String },
    /// Query or insert failure
    Database { message: String },
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Open { message } => write!(f, "History open error: {}", message),
            HistoryError::Database { message } => write!(f, "History database error: {}", message),
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<rusqlite::Error> for HistoryError {
    fn from(e: rusqlite::Error) -> Self {
        HistoryError::Database {
            message: e.to_string(),
        }
    }
}

// ============================================================================
// STORE
// ============================================================================

/// One persisted analysis record.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub url: String,
    pub is_fake: bool,
    pub confidence_score: f64,
    /// Absent when the analysis had no source URL
    pub source_credibility_score: Option<f64>,
    pub analysis_date: String,
}

pub struct HistoryStore {
    conn: Mutex<Connection>,
}

impl HistoryStore {
    /// Open (and initialize if needed) the history database at `path`.
    pub fn open(path: &Path) -> Result<Self, HistoryError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| HistoryError::Open {
                message: e.to_string(),
            })?;
        }

        let conn = Connection::open(path).map_err(|e| HistoryError::Open {
            message: e.to_string(),
        })?;
        conn.execute(CREATE_TABLE_SQL, [])
            .map_err(|e| HistoryError::Open {
                message: e.to_string(),
            })?;

        log::debug!("history store opened at {}", path.display());
        Ok(HistoryStore {
            conn: Mutex::new(conn),
        })
    }

    /// Open the store at the configured default location.
    pub fn open_default() -> Result<Self, HistoryError> {
        Self::open(&constants::get_history_db_path())
    }

    /// Append one analysis record. Long fields are truncated before
    /// persistence; `source_credibility_score` is optional.
    pub fn add_entry(
        &self,
        title: &str,
        content: &str,
        url: &str,
        is_fake: bool,
        confidence_score: f64,
        source_credibility_score: Option<f64>,
    ) -> Result<HistoryEntry, HistoryError> {
        let entry = HistoryEntry {
            id: 0,
            title: truncate_chars(title, MAX_TITLE_LEN),
            content: truncate_chars(content, MAX_CONTENT_LEN),
            url: truncate_chars(url, MAX_URL_LEN),
            is_fake,
            confidence_score,
            source_credibility_score,
            analysis_date: Utc::now().to_rfc3339(),
        };

        let mut last_error = None;
        for attempt in 1..=MAX_RETRIES {
            match self.insert(&entry) {
                Ok(id) => return Ok(HistoryEntry { id, ..entry }),
                Err(e) => {
                    log::warn!("history insert attempt {} failed: {}", attempt, e);
                    last_error = Some(e);
                    if attempt < MAX_RETRIES {
                        std::thread::sleep(RETRY_DELAY);
                    }
                }
            }
        }

        Err(last_error.unwrap_or(HistoryError::Database {
            message: "insert failed".to_string(),
        }))
    }

    fn insert(&self, entry: &HistoryEntry) -> Result<i64, HistoryError> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO article_history
             (title, content, url, is_fake, confidence_score, source_credibility_score, analysis_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                entry.title,
                entry.content,
                entry.url,
                entry.is_fake,
                entry.confidence_score,
                entry.source_credibility_score,
                entry.analysis_date,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Most recent entries first.
    pub fn get_history(&self, limit: usize) -> Result<Vec<HistoryEntry>, HistoryError> {
        let conn = self.conn.lock();
        let mut statement = conn.prepare(
            "SELECT id, title, content, url, is_fake, confidence_score,
                    source_credibility_score, analysis_date
             FROM article_history
             ORDER BY analysis_date DESC, id DESC
             LIMIT ?1",
        )?;

        let rows = statement.query_map(params![limit as i64], |row| {
            Ok(HistoryEntry {
                id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
                url: row.get(3)?,
                is_fake: row.get(4)?,
                confidence_score: row.get(5)?,
                source_credibility_score: row.get(6)?,
                analysis_date: row.get(7)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Number of stored entries.
    pub fn count(&self) -> Result<i64, HistoryError> {
        let conn = self.conn.lock();
        let count = conn.query_row("SELECT COUNT(*) FROM article_history", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Truncate on a char boundary, never mid-codepoint.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::open(&dir.path().join("history.db")).unwrap()
    }

    #[test]
    fn test_add_and_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let added = store
            .add_entry(
                "Shocking headline",
                "Full article text",
                "https://news24.net/story",
                true,
                87.5,
                Some(30.0),
            )
            .unwrap();
        assert!(added.id > 0);

        let history = store.get_history(constants::DEFAULT_HISTORY_LIMIT).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].title, "Shocking headline");
        assert!(history[0].is_fake);
        assert_eq!(history[0].source_credibility_score, Some(30.0));
    }

    #[test]
    fn test_credibility_score_may_be_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        store
            .add_entry("Pasted text", "body", "", false, 63.0, None)
            .unwrap();

        let history = store.get_history(10).unwrap();
        assert_eq!(history[0].source_credibility_score, None);
        assert_eq!(history[0].url, "");
    }

    #[test]
    fn test_fields_are_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let long = "x".repeat(5000);
        let added = store
            .add_entry(&long, &long, &long, false, 51.0, None)
            .unwrap();

        assert_eq!(added.title.chars().count(), MAX_TITLE_LEN);
        assert_eq!(added.content.chars().count(), MAX_CONTENT_LEN);
        assert_eq!(added.url.chars().count(), MAX_URL_LEN);
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        for i in 0..5 {
            store
                .add_entry(&format!("article {}", i), "body", "", false, 60.0, None)
                .unwrap();
        }

        let history = store.get_history(3).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].title, "article 4");
        assert_eq!(history[2].title, "article 2");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("short", 100), "short");
    }
}
