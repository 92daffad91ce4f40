//! The task store: one SQLite file holding projects and tasks.
//!
//! [`Store`] owns the only connection to the file. Project operations live in
//! `projects.rs` and task operations in `tasks.rs`; both extend `Store`
//! directly. Every operation that checks a row and then writes runs inside a
//! single transaction, so an error leaves the file as it was.

use super::migrations::{get_db_version, MigrationManager};
use crate::libs::error::{is_corruption, is_open_failure, Error, Result};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{params, Connection};
use std::io;
use std::path::{Path, PathBuf};

pub struct Store {
    pub(super) conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Opens the store at `path`, creating and initializing it if needed.
    ///
    /// A missing file is created with the schema and the Inbox project.
    /// Re-opening a current store writes nothing.
    ///
    /// # Errors
    ///
    /// - [`Error::StorageCorrupt`] if the file is not a SQLite database,
    ///   carries a schema version newer than this build understands, or is
    ///   unversioned with a `projects` or `tasks` table missing a column.
    /// - [`Error::Io`] if the file cannot be created or opened.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use orgnice::db::store::Store;
    ///
    /// let store = Store::open("/home/me/.orgnice/orgnice.db")?;
    /// let inbox = store.find_project_by_id(0)?;
    /// assert_eq!(inbox.name, "Inbox");
    /// # Ok::<(), orgnice::libs::error::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Store> {
        let path = path.as_ref();
        let mut conn = Connection::open(path).map_err(|e| classify_open_error(path, e))?;

        // Forces SQLite to read the file header.
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))
            .map_err(|e| classify_open_error(path, e))?;

        let manager = MigrationManager::new();
        let version = get_db_version(&conn).map_err(|e| classify_open_error(path, e))?;
        if version > manager.latest_version() {
            return Err(Error::StorageCorrupt {
                path: path.to_path_buf(),
                reason: format!("unsupported schema version {}", version),
            });
        }
        if version == 0 {
            if let Some(reason) = check_existing_layout(&conn).map_err(|e| classify_open_error(path, e))? {
                return Err(Error::StorageCorrupt {
                    path: path.to_path_buf(),
                    reason,
                });
            }
        }

        manager.run_migrations(&mut conn).map_err(|e| classify_open_error(path, e))?;
        msg_debug!(Message::StoreOpened(path.to_path_buf()));

        Ok(Store {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Columns an unversioned file must carry in any table it already has.
const EXPECTED_LAYOUT: &[(&str, &[&str])] = &[("projects", &["id", "name"]), ("tasks", &["id", "name", "project", "done"])];

/// Checks the tables of an unversioned file before migrations adopt it.
///
/// Returns a reason when an existing `projects` or `tasks` table lacks a
/// column the store relies on. Reads only.
fn check_existing_layout(conn: &Connection) -> rusqlite::Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    for (table, expected) in EXPECTED_LAYOUT {
        let columns = stmt
            .query_map(params![table], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        // No columns: the table does not exist yet.
        if columns.is_empty() {
            continue;
        }
        if let Some(missing) = expected.iter().find(|c| !columns.iter().any(|have| have.eq_ignore_ascii_case(c))) {
            return Ok(Some(format!("table {} has no column {}", table, missing)));
        }
    }
    Ok(None)
}

/// Maps SQLite failures during open onto the store's error kinds.
fn classify_open_error(path: &Path, err: rusqlite::Error) -> Error {
    if is_corruption(&err) {
        Error::StorageCorrupt {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    } else if is_open_failure(&err) {
        Error::io(path, io::Error::other(err))
    } else {
        Error::Database(err)
    }
}

/// Rejects blank names before anything is written.
pub(super) fn validate_name<'a>(entity: &str, name: &'a str) -> Result<&'a str> {
    if name.trim().is_empty() {
        return Err(Error::Validation(format!("{} name must not be empty", entity)));
    }
    Ok(name)
}
