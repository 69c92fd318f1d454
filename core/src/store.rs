//! SQLite persistence layer.
//!
//! RULE: Only this module talks to the database. The engine calls store
//! methods; subsystems never touch persistence at all. Snapshots are the
//! full `GameState` as one JSON document — loading one yields an
//! *untrusted candidate* that the caller must run through
//! `validate::validate_state` before use.

use crate::error::SimResult;
use crate::state::GameState;
use rusqlite::{params, Connection, OptionalExtension};

pub struct SaveStore {
    conn: Connection,
}

impl SaveStore {
    /// Open (or create) the save database at `path`.
    pub fn open(path: &str) -> SimResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL only applies to real files; shared-memory URIs ignore it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SimResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> SimResult<()> {
        self.conn
            .execute_batch(include_str!("../migrations/001_init.sql"))?;
        Ok(())
    }

    // ── Runs ───────────────────────────────────────────────────

    pub fn insert_run(&self, run_id: &str, artist: &str, version: &str) -> SimResult<()> {
        self.conn.execute(
            "INSERT INTO runs (run_id, artist, version, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![run_id, artist, version, chrono::Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }

    // ── Snapshots ──────────────────────────────────────────────

    pub fn save_snapshot(&self, run_id: &str, state: &GameState) -> SimResult<()> {
        let payload = serde_json::to_string(state)?;
        self.conn.execute(
            "INSERT INTO saves (run_id, created_at, payload) VALUES (?1, ?2, ?3)",
            params![run_id, chrono::Utc::now().timestamp_millis(), payload],
        )?;
        Ok(())
    }

    /// Most recent snapshot for a run, deserialized but NOT validated.
    pub fn load_latest_snapshot(&self, run_id: &str) -> SimResult<Option<GameState>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM saves WHERE run_id = ?1 ORDER BY id DESC LIMIT 1",
                params![run_id],
                |row| row.get(0),
            )
            .optional()?;
        match payload {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Snapshot count for a run. Used by tests asserting save cadence.
    pub fn snapshot_count(&self, run_id: &str) -> SimResult<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM saves WHERE run_id = ?1",
            params![run_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
