//! Selection criteria: which resources a delete invocation targets.

use crate::error::{Result, TaskRunError};
use crate::resource::ResourceKind;

/// Exactly one way of choosing targets. Built once from flags, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCriteria {
    /// Explicit names, non-empty, de-duplicated, in caller order
    ByNames(Vec<String>),
    /// Every resource labelled with this task name
    ByTaskLabel(String),
    /// Every resource in the namespace
    AllInNamespace,
}

impl SelectionCriteria {
    /// Validate raw flag values and build the criteria.
    ///
    /// Runs before any store access.
    pub fn from_flags(
        kind: &ResourceKind,
        names: &[String],
        task: Option<&str>,
        all: bool,
    ) -> Result<Self> {
        let task = task.filter(|t| !t.is_empty());

        if all {
            if !names.is_empty() || task.is_some() {
                return Err(TaskRunError::Validation(
                    "--all flag should not have any arguments or flags specified with it"
                        .to_string(),
                ));
            }
            return Ok(SelectionCriteria::AllInNamespace);
        }

        let names = dedup_names(names);

        match task {
            Some(_) if !names.is_empty() => Err(TaskRunError::Validation(format!(
                "--task flag should not be combined with {} names",
                kind.singular
            ))),
            Some(task) => Ok(SelectionCriteria::ByTaskLabel(task.to_string())),
            None if names.is_empty() => Err(TaskRunError::Validation(format!(
                "must provide {} to delete or --task flag",
                kind.plural()
            ))),
            None => Ok(SelectionCriteria::ByNames(names)),
        }
    }
}

/// Drop empty names and repeats, keeping the first occurrence
pub(crate) fn dedup_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names.iter().map(AsRef::as_ref) {
        if !name.is_empty() && !unique.iter().any(|n| n == name) {
            unique.push(name.to_string());
        }
    }
    unique
}
