use super::project::Project;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn projects(projects: &[Project]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for project in projects {
            table.add_row(row![project.id, project.name]);
        }
        table.printstd();
    }

    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "PROJECT", "DONE"]);
        for task in tasks {
            let done = if task.done { "x" } else { "" };
            table.add_row(row![task.id, task.name, task.project.name, done]);
        }
        table.printstd();
    }
}
