use crate::delete::execute::AggregatedResult;
use crate::delete::selection::SelectionCriteria;
use crate::resource::{quote_names, ResourceKind};

/// Final outcome of a delete invocation, ready to be routed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Success summary, or the failure lines when `success` is false
    pub message: String,
    pub success: bool,
    /// Names that did get deleted in a batch that failed overall
    pub deleted_summary: Option<String>,
}

pub fn report(
    kind: &ResourceKind,
    result: &AggregatedResult,
    criteria: &SelectionCriteria,
    namespace: &str,
) -> Report {
    if !result.failures.is_empty() {
        let message = result
            .failures
            .iter()
            .map(|(name, reason)| {
                format!("failed to delete {} \"{}\": {}", kind.singular, name, reason)
            })
            .collect::<Vec<_>>()
            .join("\n");

        let deleted_summary = match criteria {
            SelectionCriteria::ByNames(_) if !result.deleted.is_empty() => {
                Some(deleted_line(kind, &result.deleted))
            }
            _ => None,
        };

        return Report {
            message,
            success: false,
            deleted_summary,
        };
    }

    let message = match criteria {
        SelectionCriteria::ByNames(_) => deleted_line(kind, &result.deleted),
        // A task filter matching nothing deletes nothing and says nothing
        SelectionCriteria::ByTaskLabel(_) if result.deleted.is_empty() => String::new(),
        SelectionCriteria::ByTaskLabel(_) | SelectionCriteria::AllInNamespace => format!(
            "All {} deleted in namespace \"{}\"\n",
            kind.title_plural(),
            namespace
        ),
    };

    Report {
        message,
        success: true,
        deleted_summary: None,
    }
}

fn deleted_line(kind: &ResourceKind, names: &[String]) -> String {
    format!("{} deleted: {}\n", kind.title_plural(), quote_names(names))
}
