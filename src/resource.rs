//! Descriptor for the kind of resource being deleted.
//!
//! Every user-facing string (prompts, summaries, store messages) is rendered
//! from a [`ResourceKind`], so the pipeline itself never spells out "taskrun".

/// Static naming information for a namespaced resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// Lowercase singular name, e.g. `taskrun`
    pub singular: &'static str,
    /// Display name, e.g. `TaskRun`
    pub title: &'static str,
    /// API group, e.g. `tekton.dev`
    pub group: &'static str,
    /// Label key associating a resource with its parent task
    pub task_label: &'static str,
}

pub const TASK_RUN: ResourceKind = ResourceKind {
    singular: "taskrun",
    title: "TaskRun",
    group: "tekton.dev",
    task_label: "tekton.dev/task",
};

impl ResourceKind {
    pub fn plural(&self) -> String {
        format!("{}s", self.singular)
    }

    pub fn title_plural(&self) -> String {
        format!("{}s", self.title)
    }

    /// Fully qualified resource name as understood by the API server
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.plural(), self.group)
    }

    /// Message the API server returns when a named resource is missing
    pub fn not_found(&self, name: &str) -> String {
        format!("{} \"{}\" not found", self.qualified(), name)
    }
}

/// Message the API server returns when a namespace is missing
pub fn namespace_not_found(namespace: &str) -> String {
    format!("namespaces \"{}\" not found", namespace)
}

/// Render names as `"a", "b", "c"`
pub fn quote_names<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|n| format!("\"{}\"", n.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}
