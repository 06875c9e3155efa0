use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  clito add \"Buy groceries\"    Add a new todo
  clito list                   List all todos
  clito list --pending         List only pending todos
  clito complete 1             Mark todo #1 as completed
  clito remove 1               Remove todo #1";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "A simple command line todo application",
    long_about = None,
    after_help = EXAMPLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task list document to read and write (defaults to ./todos.json)
    #[arg(long, value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// Override configuration values (format KEY=VALUE)
    #[arg(long = "config-override", value_name = "KEY=VALUE", global = true)]
    pub config_override: Vec<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a new todo
    ///
    /// Example: clito add "Buy milk"
    Add {
        #[arg(allow_hyphen_values = true)]
        description: String,
    },
    /// List todos
    ///
    /// Example: clito list --pending
    List {
        /// Show only pending todos
        #[arg(long)]
        pending: bool,
    },
    /// Mark a todo as completed
    ///
    /// Example: clito complete 1
    Complete { id: u64 },
    /// Remove a todo
    ///
    /// Example: clito remove 1
    Remove { id: u64 },
}
