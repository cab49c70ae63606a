use crate::error::{Result, TodoError};
use crate::models::TodoItem;
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

/// Default database file, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "todo.db";

/// Persistence operations the dispatcher and the shell rely on.
///
/// Every call is a single autocommitted statement.
pub trait TodoStore {
    /// Insert a new, not yet done item and return its id
    fn add(&self, text: &str) -> Result<i64>;

    /// All items ordered by id, with their 1-based position
    fn list_all(&self) -> Result<Vec<TodoItem>>;

    /// Returns `false` when no item has this id
    fn set_status(&self, id: i64, done: bool) -> Result<bool>;

    /// Returns `false` when no item has this id
    fn remove(&self, id: i64) -> Result<bool>;

    /// Delete every done item, returning how many were removed
    fn remove_done(&self) -> Result<usize>;
}

/// Database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database and make sure the schema exists.
    ///
    /// Any failure here is reported as [`TodoError::Connect`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening database");

        let conn = Connection::open(path).map_err(TodoError::Connect)?;
        let db = Database { conn };
        db.init().map_err(TodoError::Connect)?;
        Ok(db)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(TodoError::Connect)?;
        let db = Database { conn };
        db.init().map_err(TodoError::Connect)?;
        Ok(db)
    }

    fn init(&self) -> rusqlite::Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                done INTEGER NOT NULL DEFAULT 0 CHECK (done IN (0, 1))
            )",
            [],
        )?;
        Ok(())
    }
}

impl TodoStore for Database {
    fn add(&self, text: &str) -> Result<i64> {
        let id = self
            .conn
            .query_row(
                "INSERT INTO todos (text, done) VALUES (?1, ?2) RETURNING id",
                (text, false),
                |row| row.get::<_, i64>(0),
            )
            .optional()?
            .ok_or_else(|| TodoError::Persistence("Added todo id was not returned".to_string()))?;

        debug!(id, "added todo item");
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<TodoItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, ROW_NUMBER() OVER (ORDER BY id) AS position, text, done
             FROM todos
             ORDER BY id",
        )?;

        let items = stmt.query_map([], item_from_row)?;
        items
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| e.into())
    }

    fn set_status(&self, id: i64, done: bool) -> Result<bool> {
        let changed = self
            .conn
            .execute("UPDATE todos SET done = ?1 WHERE id = ?2", (done, id))?;
        debug!(id, done, changed, "set todo status");
        Ok(changed == 1)
    }

    fn remove(&self, id: i64) -> Result<bool> {
        let changed = self.conn.execute("DELETE FROM todos WHERE id = ?1", [id])?;
        debug!(id, changed, "removed todo item");
        Ok(changed == 1)
    }

    fn remove_done(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM todos WHERE done", [])?;
        debug!(removed, "removed done todo items");
        Ok(removed)
    }
}

fn item_from_row(row: &Row) -> rusqlite::Result<TodoItem> {
    Ok(TodoItem {
        id: row.get(0)?,
        position: row.get(1)?,
        text: row.get(2)?,
        done: row.get(3)?,
    })
}
