use crate::delete::selection::{dedup_names, SelectionCriteria};
use crate::resource::ResourceKind;
use crate::store::{ResourceStore, StoreResult};

/// Turn criteria into the ordered, de-duplicated list of names to delete.
///
/// The namespace is checked first in every mode, so a bad namespace fails
/// here rather than per item during execution.
pub fn resolve<S: ResourceStore + ?Sized>(
    kind: &ResourceKind,
    criteria: &SelectionCriteria,
    namespace: &str,
    store: &S,
) -> StoreResult<Vec<String>> {
    store.ensure_namespace(namespace)?;

    let names = match criteria {
        SelectionCriteria::ByNames(names) => names.clone(),
        SelectionCriteria::ByTaskLabel(task) => {
            store.list_by_label(namespace, kind.task_label, task)?
        }
        SelectionCriteria::AllInNamespace => store.list_all(namespace)?,
    };

    Ok(dedup_names(&names))
}
