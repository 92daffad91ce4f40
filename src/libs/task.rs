use super::project::Project;
use serde::{Deserialize, Serialize};

/// A unit of work belonging to exactly one [`Project`].
///
/// Storage keeps only the project id; reads resolve it to the full project so
/// the name is never stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub project: Project,
    pub done: bool,
}

impl Task {
    pub fn new(id: i64, name: &str, project: Project) -> Self {
        Task {
            id,
            name: name.to_string(),
            project,
            done: false,
        }
    }

    pub fn project_id(&self) -> i64 {
        self.project.id
    }
}

/// Which tasks a query should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    ById(i64),
    InProject(i64),
}
