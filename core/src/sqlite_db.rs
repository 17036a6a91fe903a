use std::path::Path;

use rusqlite::config::DbConfig::SQLITE_DBCONFIG_ENABLE_FKEY;
use rusqlite::Connection;

use crate::food::Food;
use crate::repository::{Catalog, Result};

pub use rusqlite::OpenFlags;

/// Database connection.
///
/// The underlying connection closes when this drops, so release happens on
/// error paths as well as on success.
pub struct SQLiteDatabase {
    conn: Connection,
}

impl SQLiteDatabase {
    /// Opens a new connection with flags and apply configulations.
    pub fn open<P: AsRef<Path>>(path: P, flags: OpenFlags) -> Result<Self> {
        let conn = Connection::open_with_flags(path, flags)?;
        let db = Self { conn };
        db.setup()?;
        Ok(db)
    }

    /// Opens a new connection in read-only mode.
    pub fn open_r<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
    }

    /// Open a new connection in read/write mode. Creates the database if it does not exist.
    pub fn open_rwc<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )
    }

    /// Executes the schema and seed scripts inside one transaction.
    ///
    /// Each script runs as a multi-statement batch. If either batch fails
    /// the transaction guard rolls everything back on drop, so the database
    /// never keeps a partially applied schema. The scripts must not contain
    /// their own `BEGIN`/`COMMIT`.
    pub fn load_scripts(&mut self, schema_sql: &str, seed_sql: &str) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(schema_sql)?;
        tx.execute_batch(seed_sql)?;
        tx.commit()?;
        Ok(())
    }

    /// Applies configulations to the database.
    fn setup(&self) -> Result<()> {
        let _ = self.conn.set_db_config(SQLITE_DBCONFIG_ENABLE_FKEY, true)?;
        Ok(())
    }
}

impl Catalog for SQLiteDatabase {
    fn is_ready(&self) -> Result<bool> {
        let table_count = self.conn.query_row(
            "SELECT count(name) \
            FROM sqlite_master \
            WHERE type = 'table' and name = 'food'",
            [],
            |row| row.get::<_, u32>(0),
        )?;

        Ok(table_count == 1)
    }

    fn foods(&self) -> Result<Vec<Food>> {
        // id is the rowid for this schema, so ascending id is insertion
        // order for append-style seeds.
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, type FROM food ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Food {
                id: row.get(0)?,
                name: row.get(1)?,
                kind: row.get(2)?,
            })
        })?;

        let foods = rows.flatten().collect();
        Ok(foods)
    }
}
