use super::projects::fetch_project;
use super::store::{validate_name, Store};
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::libs::project::Project;
use crate::libs::task::{Task, TaskFilter};
use crate::{msg_debug, msg_warning};
use rusqlite::{params, params_from_iter, Connection, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (name, project, done) VALUES (?1, ?2, ?3)";
const INSERT_TASK_WITH_ID: &str = "INSERT INTO tasks (id, name, project, done) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_TASK: &str = "UPDATE tasks SET name = ?2, project = ?3, done = ?4 WHERE id = ?1";
const TASK_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM tasks WHERE id = ?1)";
const SELECT_TASKS: &str = "SELECT t.id, t.name, t.done, t.project, p.name FROM tasks t LEFT JOIN projects p ON p.id = t.project";
const WHERE_ID: &str = "WHERE t.id = ?1";
const WHERE_PROJECT: &str = "WHERE t.project = ?1";
const ORDER_BY_ID: &str = "ORDER BY t.id";

/// Storage form of the `done` flag.
pub fn encode_done(done: bool) -> i64 {
    i64::from(done)
}

/// Any nonzero value reads as done.
pub fn decode_done(value: i64) -> bool {
    value != 0
}

impl Store {
    /// Creates a task in `project_id` with an engine-assigned id.
    ///
    /// The project lookup and the insert share one transaction; a missing
    /// project fails with `NotFound` and writes nothing.
    pub fn create_task(&mut self, name: &str, project_id: i64) -> Result<Task> {
        let name = validate_name("task", name)?;

        let tx = self.conn.transaction()?;
        let project = fetch_project(&tx, project_id)?;
        tx.execute(INSERT_TASK, params![name, project.id, encode_done(false)])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        msg_debug!(Message::TaskCreated(id, name.to_string()));
        Ok(Task::new(id, name, project))
    }

    pub fn find_task_by_id(&self, id: i64) -> Result<Task> {
        fetch_tasks(&self.conn, TaskFilter::ById(id))?
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found("task", id))
    }

    /// Tasks of one project in id order; `NotFound` if the project is absent.
    pub fn list_tasks_in_project(&self, project_id: i64) -> Result<Vec<Task>> {
        fetch_project(&self.conn, project_id)?;
        fetch_tasks(&self.conn, TaskFilter::InProject(project_id))
    }

    pub fn list_all_tasks(&self) -> Result<Vec<Task>> {
        fetch_tasks(&self.conn, TaskFilter::All)
    }

    /// Upserts `task`.
    ///
    /// An existing row with `task.id` gets its name, project and done flag
    /// replaced. Otherwise a row is inserted with `task.id` as given, which is
    /// how exported tasks are restored. The referenced project must exist.
    pub fn store_task(&mut self, task: &Task) -> Result<()> {
        validate_name("task", &task.name)?;

        let tx = self.conn.transaction()?;
        fetch_project(&tx, task.project_id())?;

        let exists: bool = tx.query_row(TASK_EXISTS, params![task.id], |row| row.get(0))?;
        let done = encode_done(task.done);
        if exists {
            tx.execute(UPDATE_TASK, params![task.id, task.name, task.project_id(), done])?;
        } else {
            tx.execute(INSERT_TASK_WITH_ID, params![task.id, task.name, task.project_id(), done])?;
        }
        tx.commit()?;

        if exists {
            msg_debug!(Message::TaskUpdated(task.id));
        } else {
            msg_debug!(Message::TaskInserted(task.id));
        }
        Ok(())
    }
}

fn fetch_tasks(conn: &Connection, filter: TaskFilter) -> Result<Vec<Task>> {
    let (clause, params) = match filter {
        TaskFilter::All => ("", vec![]),
        TaskFilter::ById(id) => (WHERE_ID, vec![id]),
        TaskFilter::InProject(id) => (WHERE_PROJECT, vec![id]),
    };

    let mut stmt = conn.prepare(&format!("{} {} {}", SELECT_TASKS, clause, ORDER_BY_ID))?;
    let row_iter = stmt.query_map(params_from_iter(params.iter()), TaskRow::from_row)?;

    let mut tasks = Vec::new();
    for row in row_iter {
        tasks.push(row?.into_task()?);
    }
    Ok(tasks)
}

/// A task row joined with its project, before the reference is checked.
struct TaskRow {
    id: i64,
    name: String,
    done: i64,
    project_id: i64,
    project_name: Option<String>,
}

impl TaskRow {
    fn from_row(row: &Row) -> rusqlite::Result<TaskRow> {
        Ok(TaskRow {
            id: row.get(0)?,
            name: row.get(1)?,
            done: row.get(2)?,
            project_id: row.get(3)?,
            project_name: row.get(4)?,
        })
    }

    fn into_task(self) -> Result<Task> {
        let Some(project_name) = self.project_name else {
            msg_warning!(Message::TaskDanglingProject(self.id, self.project_id));
            return Err(Error::not_found("project", self.project_id));
        };

        Ok(Task {
            id: self.id,
            name: self.name,
            project: Project {
                id: self.project_id,
                name: project_name,
            },
            done: decode_done(self.done),
        })
    }
}
