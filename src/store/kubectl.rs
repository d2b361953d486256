use crate::config::KubectlConfig;
use crate::error::{Result, TaskRunError};
use crate::resource::ResourceKind;
use crate::store::{ResourceStore, StoreError, StoreResult};
use serde::Deserialize;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Store backed by the `kubectl` binary.
pub struct KubectlStore {
    kind: ResourceKind,
    binary: String,
    kubeconfig: Option<PathBuf>,
    context: Option<String>,
    verbose: bool,
}

#[derive(Debug, Deserialize)]
struct ResourceList {
    #[serde(default)]
    items: Vec<ResourceItem>,
}

#[derive(Debug, Deserialize)]
struct ResourceItem {
    metadata: ObjectMeta,
}

#[derive(Debug, Deserialize)]
struct ObjectMeta {
    name: String,
}

impl KubectlStore {
    pub fn new(kind: ResourceKind, config: &KubectlConfig, verbose: bool) -> Self {
        Self {
            kind,
            binary: config.binary.clone(),
            kubeconfig: config.kubeconfig_path(),
            context: config.context.clone(),
            verbose,
        }
    }

    /// Fail early when the configured kubectl binary cannot be found
    pub fn check_installed(&self) -> Result<()> {
        which::which(&self.binary)
            .map(|_| ())
            .map_err(|_| TaskRunError::KubectlNotInstalled(self.binary.clone()))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary);

        if let Some(ref kubeconfig) = self.kubeconfig {
            cmd.arg("--kubeconfig").arg(kubeconfig);
        }
        if let Some(ref context) = self.context {
            cmd.args(["--context", context]);
        }
        cmd.args(args);
        cmd
    }

    fn run(&self, args: &[&str]) -> StoreResult<Output> {
        if self.verbose {
            eprintln!("+ {} {}", self.binary, args.join(" "));
        }

        let output = self
            .command(args)
            .output()
            .map_err(|e| StoreError::Other(format!("failed to run {}: {}", self.binary, e)))?;

        if output.status.success() {
            Ok(output)
        } else {
            Err(parse_error(&String::from_utf8_lossy(&output.stderr)))
        }
    }

    fn list(&self, namespace: &str, selector: Option<&str>) -> StoreResult<Vec<String>> {
        let qualified = self.kind.qualified();
        let mut args = vec!["get", qualified.as_str(), "-n", namespace, "-o", "json"];
        if let Some(selector) = selector {
            args.extend(["-l", selector]);
        }

        let output = self.run(&args)?;
        parse_names(&output.stdout)
    }
}

impl ResourceStore for KubectlStore {
    fn ensure_namespace(&self, namespace: &str) -> StoreResult<()> {
        self.run(&["get", "namespace", namespace, "-o", "name"])
            .map(|_| ())
    }

    fn list_by_label(&self, namespace: &str, key: &str, value: &str) -> StoreResult<Vec<String>> {
        let selector = format!("{}={}", key, value);
        self.list(namespace, Some(&selector))
    }

    fn list_all(&self, namespace: &str) -> StoreResult<Vec<String>> {
        self.list(namespace, None)
    }

    fn delete(&self, namespace: &str, name: &str) -> StoreResult<()> {
        let qualified = self.kind.qualified();
        self.run(&delete_args(&qualified, namespace, name))
            .map(|_| ())
    }
}

/// `delete` arguments; the name follows `--` so a leading `-` is never a flag
fn delete_args<'a>(qualified: &'a str, namespace: &'a str, name: &'a str) -> [&'a str; 6] {
    ["delete", qualified, "-n", namespace, "--", name]
}

/// Decode `items[].metadata.name` from a `kubectl get -o json` list
fn parse_names(stdout: &[u8]) -> StoreResult<Vec<String>> {
    let list: ResourceList = serde_json::from_slice(stdout)
        .map_err(|e| StoreError::Other(format!("invalid kubectl output: {}", e)))?;
    Ok(list.items.into_iter().map(|i| i.metadata.name).collect())
}

/// Reduce kubectl stderr to the server's message.
///
/// `Error from server (NotFound): taskruns.tekton.dev "x" not found` becomes
/// `StoreError::NotFound("taskruns.tekton.dev \"x\" not found")`.
fn parse_error(stderr: &str) -> StoreError {
    let mut lines = stderr.lines().map(str::trim).filter(|l| !l.is_empty());

    // Warnings and klog lines may precede the server error
    let server_error = lines
        .clone()
        .find_map(|l| l.strip_prefix("Error from server ("))
        .and_then(|rest| rest.split_once("): "));

    if let Some((reason, message)) = server_error {
        return if reason == "NotFound" {
            StoreError::NotFound(message.to_string())
        } else {
            StoreError::Other(message.to_string())
        };
    }

    let line = lines.next_back().unwrap_or("kubectl failed with no output");
    StoreError::Other(line.strip_prefix("error: ").unwrap_or(line).to_string())
}
