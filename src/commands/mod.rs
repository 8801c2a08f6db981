pub mod comment;
pub mod init;
pub mod stats;
pub mod task;

use crate::controllers::{CommentController, TaskController};
use crate::db::{db::Db, repository::Repository};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure tache and create the database")]
    Init,
    #[command(about = "Create, list, edit and delete tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Manage comments attached to a task", arg_required_else_help = true)]
    Comment(comment::CommentArgs),
    #[command(about = "Show task counts per state and overdue")]
    Stats(stats::StatsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parses the command line, opens the database for the duration of the
    /// command and closes it afterwards, even when the command failed.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        let config = match cli.command {
            Commands::Init => init::cmd()?,
            _ => Config::read()?,
        };

        let mut db = Db::open_default(&config)?;
        db.init_schema()?;
        let result = Self::dispatch(cli.command, &db, &config);
        db.close()?;

        result
    }

    fn dispatch(command: Commands, db: &Db, config: &Config) -> Result<()> {
        let repository = Repository::new(db);
        let tasks = TaskController::new(repository).with_views(config.views_or_default());
        let comments = CommentController::new(repository);

        match command {
            Commands::Init => {
                let location = db.path().map(|path| path.display().to_string()).unwrap_or_default();
                msg_success!(Message::DatabaseReady(location));
                Ok(())
            }
            Commands::Task(args) => task::cmd(args, &tasks, &comments),
            Commands::Comment(args) => comment::cmd(args, &comments),
            Commands::Stats(args) => stats::cmd(args, &tasks),
        }
    }
}
