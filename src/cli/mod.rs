use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod flags;
pub use flags::{ConnectionFlags, SelectionFlags};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration files
    Validate {
        /// Optional path to a specific config file to validate
        file: Option<PathBuf>,
    },

    /// Show effective configuration after merging all sources
    Show,
}

#[derive(Parser, Debug)]
#[command(name = "taskrun")]
#[command(about = "Delete Tekton TaskRuns from a namespace", long_about = None)]
#[command(version = env!("TASKRUN_VERSION"))]
#[command(after_help = "\
EXAMPLES:
  taskrun delete tr-1 tr-2 -n ci        Delete two TaskRuns (asks first)
  taskrun rm --task build -n ci         Delete every TaskRun of Task 'build'
  taskrun delete --all -f -n ci         Delete all TaskRuns without asking")]
pub struct Cli {
    /// Show verbose output including kubectl invocations
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub connection: ConnectionFlags,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete TaskRuns by name, by Task, or all in a namespace
    #[command(alias = "rm")]
    Delete(DeleteCmd),

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Parser, Debug)]
pub struct DeleteCmd {
    #[command(flatten)]
    pub selection: SelectionFlags,

    /// Namespace to delete from (default: configured namespace)
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Show what would be deleted without making changes
    #[arg(long)]
    pub dry_run: bool,
}
