use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::filter::ALL;
use crate::models::DEFAULT_COLOR;

const VERSION: &str = env!("TASKFLOW_VERSION");

#[derive(Parser)]
#[command(
    name = "taskflow",
    version = VERSION,
    about = "Personal task manager: tasks, categories and completion stats",
    after_help = "\
NOTE:
  Data lives in --data <dir>, else $TASKFLOW_HOME, else the nearest .taskflow/ upwards.
  Run `taskflow init --email <email>` before any other command.

EXIT CODES:
  0  Success
  1  Error (not initialized, no session, validation, not found, DB)

BEHAVIOR NOTES:
  Ids may be abbreviated to any unique prefix.
  Moving a task to `completed` records completed_at; reopening keeps it.
  Deleting a category keeps its tasks; they show the category as deleted.
  Logs go to stderr. RUST_LOG overrides -v/-q."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Data directory holding taskflow.db and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less logging (-q warn, -qq error)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the store, register a user and sign in
    Init {
        #[arg(long)]
        email: String,
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// admin or user
        #[arg(long, default_value = "user")]
        role: String,
    },

    /// Sign in as an existing user
    Login {
        #[arg(long)]
        email: String,
    },

    /// End the current session
    Logout,

    /// Stats for all tasks plus the filtered task list
    Dashboard(FilterArgs),

    /// Task management
    #[command(subcommand)]
    Task(TaskCommands),

    /// Category management
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Current user and completion rate of the tasks they created
    Profile,
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Case-insensitive text matched against title and description
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// pending, in_progress, completed, cancelled or all
    #[arg(long, default_value = ALL)]
    pub status: String,

    /// low, medium, high, urgent or all
    #[arg(long, default_value = ALL)]
    pub priority: String,

    /// Category id (or prefix) or all
    #[arg(long, default_value = ALL)]
    pub category: String,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    Add {
        /// Task title
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "medium")]
        priority: String,
        #[arg(long, default_value = "pending")]
        status: String,
        /// Category id or prefix
        #[arg(long)]
        category: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks, newest first
    List(FilterArgs),
    /// Show task details
    Show {
        /// Task ID or prefix
        id: String,
    },
    /// Edit task fields
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long, conflicts_with = "clear_category")]
        category: Option<String>,
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        #[arg(long)]
        clear_description: bool,
        #[arg(long)]
        clear_category: bool,
        #[arg(long)]
        clear_due: bool,
    },
    /// Set task status
    Status {
        id: String,
        /// pending, in_progress, completed or cancelled
        status: String,
    },
    /// Toggle between completed and pending
    Toggle {
        id: String,
    },
    /// Delete a task
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a category
    Add {
        name: String,
        /// #rgb or #rrggbb
        #[arg(long, default_value = DEFAULT_COLOR)]
        color: String,
    },
    /// List categories with their task counts
    List,
    /// Rename or recolor a category
    Edit {
        /// Category ID or prefix
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a category (its tasks are kept)
    Delete {
        id: String,
    },
}
