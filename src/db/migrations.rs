//! Schema migration management for the task store.
//!
//! The schema version lives in SQLite's `PRAGMA user_version`, so the store
//! file holds nothing but the `projects` and `tasks` tables.
//!
//! ## Usage
//!
//! ```rust
//! use orgnice::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 1);
//! # Ok::<(), rusqlite::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::libs::project::{INBOX_ID, INBOX_NAME};
use crate::msg_debug;
use rusqlite::{params, Connection, Result, Transaction};

/// A single schema change.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number, applied in ascending order
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Ordered registry of every schema change the store knows about.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all migrations in version order.
    ///
    /// Version 1 uses `IF NOT EXISTS` and `INSERT OR IGNORE` so that an
    /// unversioned file already carrying the two tables is adopted in place.
    fn register_migrations(&mut self) {
        // Version 1: projects, tasks and the Inbox project
        self.add_migration(1, "create_projects_and_tasks", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS projects (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL
                )",
                [],
            )?;
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    project INTEGER DEFAULT 0,
                    done INTEGER DEFAULT 0
                )",
                [],
            )?;
            // Listing a project's tasks filters on this column
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_project ON tasks(project)", [])?;
            tx.execute(
                "INSERT OR IGNORE INTO projects (id, name) VALUES (?1, ?2)",
                params![INBOX_ID, INBOX_NAME],
            )?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every pending migration in a single transaction.
    ///
    /// Returns the number of migrations applied; zero means the schema was
    /// already current and nothing was written.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<usize> {
        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::StoreUpToDate(current_version));
            return Ok(0);
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in &pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));
            (migration.up)(&tx)?;
            tx.pragma_update(None, "user_version", migration.version)?;
            msg_debug!(Message::MigrationCompleted(migration.version));
        }
        tx.commit()?;

        msg_debug!(Message::AllMigrationsCompleted(self.latest_version()));
        Ok(pending.len())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        conn.pragma_query_value(None, "user_version", |row| row.get(0))
    }

    /// Highest version this build knows how to produce.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Brings `conn` up to the latest schema version.
pub fn init_with_migrations(conn: &mut Connection) -> Result<usize> {
    MigrationManager::new().run_migrations(conn)
}

/// Current schema version stamped in the database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

/// True if the database is behind the latest known schema version.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
