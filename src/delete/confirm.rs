//! Interactive confirmation before anything is deleted.

use crate::delete::selection::SelectionCriteria;
use crate::resource::{quote_names, ResourceKind};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Force flag set; no prompt shown, no input read
    NotRequired,
    Confirmed,
    Declined,
}

impl Confirmation {
    pub fn proceeds(self) -> bool {
        !matches!(self, Confirmation::Declined)
    }
}

/// Prompt for the given selection, ending in `(y/n): ` with no newline
pub fn prompt(
    kind: &ResourceKind,
    criteria: &SelectionCriteria,
    targets: &[String],
    namespace: &str,
) -> String {
    match criteria {
        SelectionCriteria::ByNames(_) => format!(
            "Are you sure you want to delete {} {} (y/n): ",
            kind.singular,
            quote_names(targets)
        ),
        SelectionCriteria::ByTaskLabel(task) => format!(
            "Are you sure you want to delete all {} related to task \"{}\" (y/n): ",
            kind.plural(),
            task
        ),
        SelectionCriteria::AllInNamespace => format!(
            "Are you sure you want to delete all {} in namespace \"{}\" (y/n): ",
            kind.plural(),
            namespace
        ),
    }
}

/// Error text used when the user declines
pub fn cancellation_message(
    kind: &ResourceKind,
    criteria: &SelectionCriteria,
    targets: &[String],
    namespace: &str,
) -> String {
    match criteria {
        SelectionCriteria::ByNames(_) => format!(
            "canceled deleting {} {}",
            kind.singular,
            quote_names(targets)
        ),
        SelectionCriteria::ByTaskLabel(task) => format!(
            "canceled deleting all {} related to task \"{}\"",
            kind.plural(),
            task
        ),
        SelectionCriteria::AllInNamespace => format!(
            "canceled deleting all {} in namespace \"{}\"",
            kind.plural(),
            namespace
        ),
    }
}

/// Ask for confirmation unless `force` is set.
///
/// Reads exactly one line. EOF or an unreadable input counts as an empty
/// answer, so a closed stdin declines instead of hanging.
pub fn confirm(
    kind: &ResourceKind,
    criteria: &SelectionCriteria,
    targets: &[String],
    namespace: &str,
    force: bool,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> io::Result<Confirmation> {
    if force {
        return Ok(Confirmation::NotRequired);
    }

    write!(out, "{}", prompt(kind, criteria, targets, namespace))?;
    out.flush()?;

    Ok(decide(&read_answer(input)))
}

fn read_answer(input: &mut dyn BufRead) -> String {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => line,
        Err(_) => String::new(),
    }
}

/// Only `y` / `yes` (any case, surrounding whitespace ignored) confirm
pub fn decide(answer: &str) -> Confirmation {
    let answer = answer.trim().to_lowercase();
    if answer == "y" || answer == "yes" {
        Confirmation::Confirmed
    } else {
        Confirmation::Declined
    }
}
