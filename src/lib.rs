//! # Orgnice - Organize projects and tasks
//!
//! The local persistence layer of a single-user task manager.
//!
//! ## Features
//!
//! - **Task Store**: Projects and tasks in one SQLite file, with the Inbox
//!   project as the default home for new tasks
//! - **Upsert**: Update a task in place or restore it under its original id
//! - **Home Bootstrap**: Create the application directory or repair its
//!   owner permissions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use orgnice::db::store::Store;
//! use orgnice::libs::config::Config;
//! use orgnice::libs::data_storage::DataStorage;
//!
//! let storage = DataStorage::new();
//! storage.init()?;
//! let config = Config::read(&storage)?;
//! let mut store = Store::open(config.database_path(&storage))?;
//! store.create_task("Water the plants", 0)?;
//! # Ok::<(), orgnice::libs::error::Error>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
