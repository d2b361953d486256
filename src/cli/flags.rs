use clap::Args;
use std::path::PathBuf;

/// Cluster connection flags, accepted by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionFlags {
    /// Kubeconfig file to use instead of the kubectl default
    #[arg(short = 'k', long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(short = 'c', long, global = true)]
    pub context: Option<String>,
}

/// Mutually exclusive ways of choosing what to delete.
///
/// Exclusivity is validated by `SelectionCriteria::from_flags` so that the
/// error messages stay the same whether or not the CLI is involved.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionFlags {
    /// Names of the TaskRuns to delete
    pub names: Vec<String>,

    /// Delete all TaskRuns associated with this Task
    #[arg(short = 't', long)]
    pub task: Option<String>,

    /// Delete all TaskRuns in the namespace
    #[arg(long)]
    pub all: bool,
}
