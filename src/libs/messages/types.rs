//! Message types for all user-facing and log output.
//!
//! Every line orgnice prints or logs is a variant of [`Message`]; the text
//! lives in `display.rs`.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    // === STORE MESSAGES ===
    StoreOpened(PathBuf),
    StoreUpToDate(u32),
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    AllMigrationsCompleted(u32),

    // === PROJECT MESSAGES ===
    ProjectCreated(i64, String),
    ProjectsHeader,
    ProjectsNotFound,

    // === TASK MESSAGES ===
    TaskCreated(i64, String),
    TaskInserted(i64),
    TaskUpdated(i64),
    TaskMarkedDone(i64),
    TaskReopened(i64),
    TaskRenamed(i64, String),
    TaskMoved(i64, String),
    TaskDanglingProject(i64, i64), // task id, project id
    TasksHeader(String),           // project name or "all projects"
    TasksNotFound,

    // === DIRECTORY MESSAGES ===
    DirectoryCreated(PathBuf),
    DirectoryPermissionsRepaired(PathBuf, u32),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(PathBuf),
    ConfigNotFoundUsingDefaults,

    // === ERROR MESSAGES ===
    InitFailed(String),
    HomeDirUnresolved,
}
