//! Display implementation for orgnice messages.
//!
//! Keeps all user-facing text in one place so the store, the directory
//! bootstrap and the command layer format their output the same way.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === STORE MESSAGES ===
            Message::StoreOpened(path) => format!("Opened task store at {}", path.display()),
            Message::StoreUpToDate(version) => format!("Task store schema is up to date (version {})", version),
            Message::MigrationsFound(count) => format!("Found {} pending schema migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::AllMigrationsCompleted(version) => format!("Task store schema upgraded to version {}", version),

            // === PROJECT MESSAGES ===
            Message::ProjectCreated(id, name) => format!("Project '{}' created with id {}", name, id),
            Message::ProjectsHeader => "Projects:".to_string(),
            Message::ProjectsNotFound => "No matching projects".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(id, name) => format!("Task '{}' created with id {}", name, id),
            Message::TaskInserted(id) => format!("Task {} inserted with caller-supplied id", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskMarkedDone(id) => format!("Task {} marked as done", id),
            Message::TaskReopened(id) => format!("Task {} reopened", id),
            Message::TaskRenamed(id, name) => format!("Task {} renamed to '{}'", id, name),
            Message::TaskMoved(id, project) => format!("Task {} moved to project '{}'", id, project),
            Message::TaskDanglingProject(task_id, project_id) => {
                format!("Task {} references project {} which does not exist", task_id, project_id)
            }
            Message::TasksHeader(scope) => format!("Tasks in {}:", scope),
            Message::TasksNotFound => "No tasks found".to_string(),

            // === DIRECTORY MESSAGES ===
            Message::DirectoryCreated(path) => format!("Created directory {}", path.display()),
            Message::DirectoryPermissionsRepaired(path, mode) => {
                format!("Added owner permissions to {} (mode now {:o})", path.display(), mode)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path.display()),
            Message::ConfigNotFoundUsingDefaults => "No configuration file found, using defaults".to_string(),

            // === ERROR MESSAGES ===
            Message::InitFailed(reason) => format!("Failed to initialize orgnice: {}", reason),
            Message::HomeDirUnresolved => "Unable to resolve the user's home directory, falling back to the current directory".to_string(),
        };
        write!(f, "{}", s)
    }
}
