pub mod project;
pub mod task;

use crate::db::store::Store;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create and search projects", arg_required_else_help = true)]
    Project(project::ProjectArgs),
    #[command(about = "Create, list and update tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Application root directory (defaults to ~/.orgnice)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let mut store = open_store(cli.home)?;

        match cli.command {
            Commands::Project(args) => project::cmd(&mut store, args),
            Commands::Task(args) => task::cmd(&mut store, args),
        }
    }
}

/// Bootstraps the home directory and opens the store inside it.
///
/// Any failure here is fatal for the command line.
fn open_store(home: Option<PathBuf>) -> Result<Store> {
    let storage = home.map(DataStorage::from_path).unwrap_or_default();

    storage
        .init()
        .and_then(|_| Config::read(&storage))
        .and_then(|config| Store::open(config.database_path(&storage)))
        .map_err(|e| anyhow!(Message::InitFailed(e.to_string())))
}
