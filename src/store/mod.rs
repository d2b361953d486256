//! Remote resource store seam.
//!
//! The deletion pipeline only needs four namespace-scoped operations. The
//! production implementation drives `kubectl`; [`MemoryStore`] backs tests.

pub mod kubectl;
pub mod memory;

pub use kubectl::KubectlStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Error reported by the store. `Display` is the store's own message, verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Namespace-scoped get/list/delete over one resource kind.
pub trait ResourceStore {
    /// Fail with `namespaces "<ns>" not found` when the namespace is missing
    fn ensure_namespace(&self, namespace: &str) -> StoreResult<()>;

    /// Names of resources whose label `key` equals `value`, in store order
    fn list_by_label(&self, namespace: &str, key: &str, value: &str) -> StoreResult<Vec<String>>;

    /// Names of every resource in the namespace, in store order
    fn list_all(&self, namespace: &str) -> StoreResult<Vec<String>>;

    fn delete(&self, namespace: &str, name: &str) -> StoreResult<()>;
}
