//! Core library modules for orgnice.
//!
//! - **Entities**: [`project::Project`] and [`task::Task`]
//! - **Bootstrap**: [`data_storage::DataStorage`] and [`directory::ensure_directory`]
//! - **Settings**: [`config::Config`]
//! - **Errors and output**: [`error::Error`] and the `msg_*` macros in [`messages`]
//! - **Presentation**: [`view::View`] tables for the command line

pub mod config;
pub mod data_storage;
pub mod directory;
pub mod error;
pub mod messages;
pub mod project;
pub mod task;
pub mod view;
