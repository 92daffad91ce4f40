//! Persistence layer for orgnice.
//!
//! A single SQLite file holds two tables, `projects` and `tasks`. Every
//! operation on them goes through [`store::Store`], which owns the connection.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use orgnice::db::store::Store;
//!
//! let mut store = Store::open("orgnice.db")?;
//! let project = store.create_project("Garden")?;
//! let mut task = store.create_task("Plant tomatoes", project.id)?;
//!
//! task.done = true;
//! store.store_task(&task)?;
//! assert!(store.find_task_by_id(task.id)?.done);
//! # Ok::<(), orgnice::libs::error::Error>(())
//! ```

/// Store handle, opening and schema bootstrap.
pub mod store;

/// Versioned schema changes, tracked through `PRAGMA user_version`.
pub mod migrations;

/// Project creation, lookup and search.
pub mod projects;

/// Task creation, lookup, listing and upsert.
pub mod tasks;
