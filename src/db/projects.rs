use super::store::{validate_name, Store};
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::libs::project::Project;
use crate::msg_debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_PROJECT: &str = "INSERT INTO projects (name) VALUES (?1)";
const SELECT_PROJECT_BY_ID: &str = "SELECT id, name FROM projects WHERE id = ?1";
const SELECT_ALL_PROJECTS: &str = "SELECT id, name FROM projects ORDER BY id";

impl Store {
    /// Creates a project with an engine-assigned id.
    ///
    /// Names need not be unique.
    pub fn create_project(&mut self, name: &str) -> Result<Project> {
        let name = validate_name("project", name)?;

        let tx = self.conn.transaction()?;
        tx.execute(INSERT_PROJECT, params![name])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        msg_debug!(Message::ProjectCreated(id, name.to_string()));
        Ok(Project::new(id, name))
    }

    pub fn find_project_by_id(&self, id: i64) -> Result<Project> {
        fetch_project(&self.conn, id)
    }

    /// Projects whose name contains `needle`, ignoring case, in id order.
    ///
    /// An empty needle returns every project. No match is an empty vector.
    pub fn search_projects(&self, needle: &str) -> Result<Vec<Project>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_PROJECTS)?;
        let project_iter = stmt.query_map([], project_from_row)?;

        let mut projects = Vec::new();
        for project in project_iter {
            let project = project?;
            if project.name_contains(needle) {
                projects.push(project);
            }
        }
        Ok(projects)
    }
}

/// Looks up a project on any connection, including an open transaction.
pub(super) fn fetch_project(conn: &Connection, id: i64) -> Result<Project> {
    conn.query_row(SELECT_PROJECT_BY_ID, params![id], project_from_row)
        .optional()?
        .ok_or_else(|| Error::not_found("project", id))
}

fn project_from_row(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
