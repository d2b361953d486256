use crate::store::ResourceStore;
use std::fmt;

/// Result of deleting one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    Failed { reason: String },
}

impl fmt::Display for DeletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionOutcome::Deleted => write!(f, "deleted"),
            DeletionOutcome::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

/// Outcomes of a whole batch, in resolved order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedResult {
    pub deleted: Vec<String>,
    /// `(name, store message)` pairs
    pub failures: Vec<(String, String)>,
}

impl AggregatedResult {
    pub fn record(mut self, name: &str, outcome: DeletionOutcome) -> Self {
        match outcome {
            DeletionOutcome::Deleted => self.deleted.push(name.to_string()),
            DeletionOutcome::Failed { reason } => self.failures.push((name.to_string(), reason)),
        }
        self
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Delete every target once, continuing past failures.
pub fn execute<S: ResourceStore + ?Sized>(
    targets: &[String],
    namespace: &str,
    store: &S,
    verbose: bool,
) -> AggregatedResult {
    targets.iter().fold(AggregatedResult::default(), |result, name| {
        let outcome = match store.delete(namespace, name) {
            Ok(()) => DeletionOutcome::Deleted,
            Err(e) => DeletionOutcome::Failed {
                reason: e.to_string(),
            },
        };
        if verbose {
            eprintln!("{}: {}", name, outcome);
        }
        result.record(name, outcome)
    })
}
