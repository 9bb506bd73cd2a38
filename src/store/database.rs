//! DuckDB-backed storage: a single `kv` table in a database file.

use super::Storage;
use crate::error::Result;
use duckdb::{params, Connection as DuckDbConnection};
use std::path::{Path, PathBuf};

const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS kv (key VARCHAR PRIMARY KEY, value VARCHAR NOT NULL)";

/// Stores keys as rows of a `kv(key, value)` table.
pub struct DuckDbStorage {
    conn: DuckDbConnection,
    path: Option<PathBuf>,
}

impl DuckDbStorage {
    /// Open (or create) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = DuckDbConnection::open(path.as_ref())?;
        Self::init(conn, Some(path.as_ref().to_path_buf()))
    }

    /// Open a throwaway in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Self::init(conn, None)
    }

    fn init(conn: DuckDbConnection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch(CREATE_TABLE)?;
        Ok(Self { conn, path })
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Storage for DuckDbStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?")?;
        let mut rows = stmt.query(params![key])?;
        let value = match rows.next()? {
            Some(row) => Some(row.get::<_, String>(0)?),
            None => None,
        };
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?, ?)",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?", params![key])?;
        Ok(())
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => format!("duckdb:{}", path.display()),
            None => "duckdb::memory:".to_string(),
        }
    }
}
