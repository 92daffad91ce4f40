use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    action: ProjectAction,
}

#[derive(Debug, Subcommand)]
enum ProjectAction {
    #[command(about = "Create a project")]
    Add {
        #[arg(required = true)]
        name: String,
    },
    #[command(about = "List projects, optionally filtered by name")]
    List {
        /// Case-insensitive part of the project name
        #[arg(default_value = "")]
        filter: String,
    },
}

pub fn cmd(store: &mut Store, project_args: ProjectArgs) -> Result<()> {
    match project_args.action {
        ProjectAction::Add { name } => {
            let project = store.create_project(&name)?;
            msg_success!(Message::ProjectCreated(project.id, project.name));
        }
        ProjectAction::List { filter } => {
            let projects = store.search_projects(&filter)?;
            if projects.is_empty() {
                msg_print!(Message::ProjectsNotFound);
            } else {
                msg_print!(Message::ProjectsHeader);
                View::projects(&projects);
            }
        }
    }

    Ok(())
}
