use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::libs::project::INBOX_ID;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    action: TaskAction,
}

#[derive(Debug, Subcommand)]
enum TaskAction {
    #[command(about = "Create a task")]
    Add {
        #[arg(required = true)]
        name: String,
        /// Project id, the Inbox when omitted
        #[arg(short, long, default_value_t = INBOX_ID)]
        project: i64,
    },
    #[command(about = "List tasks of one project or of all projects")]
    List {
        #[arg(short, long)]
        project: Option<i64>,
    },
    #[command(about = "Show a single task")]
    Show { id: i64 },
    #[command(about = "Mark a task as done")]
    Done {
        id: i64,
        /// Reopen the task instead
        #[arg(long)]
        undo: bool,
    },
    #[command(about = "Rename a task")]
    Rename { id: i64, name: String },
    #[command(about = "Move a task to another project")]
    Move { id: i64, project: i64 },
}

pub fn cmd(store: &mut Store, task_args: TaskArgs) -> Result<()> {
    match task_args.action {
        TaskAction::Add { name, project } => {
            let task = store.create_task(&name, project)?;
            msg_success!(Message::TaskCreated(task.id, task.name));
        }
        TaskAction::List { project } => {
            let (scope, tasks) = match project {
                Some(id) => (store.find_project_by_id(id)?.name, store.list_tasks_in_project(id)?),
                None => ("all projects".to_string(), store.list_all_tasks()?),
            };
            if tasks.is_empty() {
                msg_print!(Message::TasksNotFound);
            } else {
                msg_print!(Message::TasksHeader(scope));
                View::tasks(&tasks);
            }
        }
        TaskAction::Show { id } => {
            let task = store.find_task_by_id(id)?;
            View::tasks(&[task]);
        }
        TaskAction::Done { id, undo } => {
            let mut task = store.find_task_by_id(id)?;
            task.done = !undo;
            store.store_task(&task)?;
            if undo {
                msg_success!(Message::TaskReopened(id));
            } else {
                msg_success!(Message::TaskMarkedDone(id));
            }
        }
        TaskAction::Rename { id, name } => {
            let mut task = store.find_task_by_id(id)?;
            task.name = name;
            store.store_task(&task)?;
            msg_success!(Message::TaskRenamed(id, task.name));
        }
        TaskAction::Move { id, project } => {
            let mut task = store.find_task_by_id(id)?;
            task.project = store.find_project_by_id(project)?;
            store.store_task(&task)?;
            msg_success!(Message::TaskMoved(id, task.project.name));
        }
    }

    Ok(())
}
