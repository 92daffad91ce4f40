use serde::{Deserialize, Serialize};

/// Id of the reserved default project.
pub const INBOX_ID: i64 = 0;
/// Name of the reserved default project.
pub const INBOX_NAME: &str = "Inbox";

/// A named container for tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

impl Project {
    pub fn new(id: i64, name: &str) -> Self {
        Project { id, name: name.to_string() }
    }

    /// The default project every store is created with.
    pub fn inbox() -> Self {
        Project::new(INBOX_ID, INBOX_NAME)
    }

    /// Case-insensitive substring match on the project name.
    ///
    /// An empty needle matches every project.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
