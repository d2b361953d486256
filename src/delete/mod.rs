//! Confirmation-gated batch deletion.
//!
//! A delete runs strictly in order: selection flags are validated into
//! [`SelectionCriteria`], [`resolve`] turns them into target names, [`confirm`]
//! gates on the user's answer, [`execute`] deletes each target independently
//! and [`report`] renders the outcome. Validation and cancellation both stop
//! before the first delete call.

pub mod confirm;
pub mod execute;
pub mod report;
pub mod resolve;
pub mod selection;

pub use confirm::{confirm, Confirmation};
pub use execute::{execute, AggregatedResult, DeletionOutcome};
pub use report::{report, Report};
pub use resolve::resolve;
pub use selection::SelectionCriteria;

use crate::error::{Result, TaskRunError};
use crate::resource::{quote_names, ResourceKind};
use crate::store::ResourceStore;
use std::io::{BufRead, Write};

/// Everything a single delete invocation needs besides its I/O.
#[derive(Debug, Clone)]
pub struct DeleteRequest {
    pub criteria: SelectionCriteria,
    pub namespace: String,
    pub force: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

/// Run the full pipeline against `store`.
///
/// Prompts and success output go to `out`. On failure, names that were
/// deleted anyway are written to `out` and the failure lines are returned as
/// [`TaskRunError::DeleteFailed`].
pub fn run<S: ResourceStore + ?Sized>(
    kind: &ResourceKind,
    request: &DeleteRequest,
    store: &S,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let DeleteRequest {
        criteria,
        namespace,
        force,
        dry_run,
        verbose,
    } = request;

    let targets = resolve(kind, criteria, namespace, store)?;
    if *verbose {
        eprintln!(
            "Resolved {} {} in namespace \"{}\"",
            targets.len(),
            kind.plural(),
            namespace
        );
    }

    if *dry_run {
        if targets.is_empty() {
            writeln!(
                out,
                "No {} found to delete in namespace \"{}\"",
                kind.plural(),
                namespace
            )?;
        } else {
            writeln!(out, "Would delete {}: {}", kind.plural(), quote_names(&targets))?;
        }
        return Ok(());
    }

    let decision = confirm(kind, criteria, &targets, namespace, *force, input, out)?;
    if !decision.proceeds() {
        return Err(TaskRunError::Canceled(confirm::cancellation_message(
            kind, criteria, &targets, namespace,
        )));
    }

    let result = execute(&targets, namespace, store, *verbose);
    let report = report(kind, &result, criteria, namespace);

    if report.success {
        write!(out, "{}", report.message)?;
        out.flush()?;
        return Ok(());
    }

    if let Some(ref deleted) = report.deleted_summary {
        write!(out, "{}", deleted)?;
        out.flush()?;
    }
    Err(TaskRunError::DeleteFailed(report.message))
}
