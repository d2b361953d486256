use crate::resource::{namespace_not_found, ResourceKind};
use crate::store::{ResourceStore, StoreError, StoreResult};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone)]
struct Record {
    namespace: String,
    name: String,
    labels: HashMap<String, String>,
}

/// In-process store with the same error messages as the API server.
///
/// Records keep insertion order, which is the order list calls return them in.
#[derive(Debug)]
pub struct MemoryStore {
    kind: ResourceKind,
    namespaces: BTreeSet<String>,
    records: RefCell<Vec<Record>>,
    failures: HashMap<String, String>,
    delete_calls: Cell<usize>,
}

impl MemoryStore {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            namespaces: BTreeSet::new(),
            records: RefCell::new(Vec::new()),
            failures: HashMap::new(),
            delete_calls: Cell::new(0),
        }
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespaces.insert(namespace.to_string());
        self
    }

    /// Add a resource, creating its namespace if needed
    pub fn with_resource(mut self, namespace: &str, name: &str, labels: &[(&str, &str)]) -> Self {
        self.namespaces.insert(namespace.to_string());
        self.records.get_mut().push(Record {
            namespace: namespace.to_string(),
            name: name.to_string(),
            labels: labels
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self
    }

    /// Make every delete of `name` fail with `message`
    pub fn with_delete_failure(mut self, name: &str, message: &str) -> Self {
        self.failures.insert(name.to_string(), message.to_string());
        self
    }

    /// Number of delete calls issued so far, successful or not
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.get()
    }

    pub fn names(&self, namespace: &str) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.namespace == namespace)
            .map(|r| r.name.clone())
            .collect()
    }

    pub fn contains(&self, namespace: &str, name: &str) -> bool {
        self.records
            .borrow()
            .iter()
            .any(|r| r.namespace == namespace && r.name == name)
    }
}

impl ResourceStore for MemoryStore {
    fn ensure_namespace(&self, namespace: &str) -> StoreResult<()> {
        if self.namespaces.contains(namespace) {
            Ok(())
        } else {
            Err(StoreError::NotFound(namespace_not_found(namespace)))
        }
    }

    fn list_by_label(&self, namespace: &str, key: &str, value: &str) -> StoreResult<Vec<String>> {
        self.ensure_namespace(namespace)?;
        Ok(self
            .records
            .borrow()
            .iter()
            .filter(|r| r.namespace == namespace)
            .filter(|r| r.labels.get(key).map(String::as_str) == Some(value))
            .map(|r| r.name.clone())
            .collect())
    }

    fn list_all(&self, namespace: &str) -> StoreResult<Vec<String>> {
        self.ensure_namespace(namespace)?;
        Ok(self.names(namespace))
    }

    fn delete(&self, namespace: &str, name: &str) -> StoreResult<()> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        self.ensure_namespace(namespace)?;

        if let Some(message) = self.failures.get(name) {
            return Err(StoreError::Other(message.clone()));
        }

        let mut records = self.records.borrow_mut();
        match records
            .iter()
            .position(|r| r.namespace == namespace && r.name == name)
        {
            Some(index) => {
                records.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(self.kind.not_found(name))),
        }
    }
}
