//! End-to-end tests for `taskrun delete` against a scripted kubectl.
//!
//! The fake kubectl keeps one file per TaskRun under
//! `<root>/<namespace>/<name>`, whose content is the `tekton.dev/task` label.
//! Every invocation is appended to `<root>/.calls`.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

const FAKE_KUBECTL: &str = r##"#!/bin/sh
root="$FAKE_KUBE_ROOT"
echo "$*" >> "$root/.calls"

verb=""; kind=""; name=""; ns="default"; selector=""
while [ $# -gt 0 ]; do
  case "$1" in
    -n) ns="$2"; shift 2 ;;
    -l) selector="$2"; shift 2 ;;
    -o|--kubeconfig|--context) shift 2 ;;
    --) name="$2"; shift 2 ;;
    *)
      if [ -z "$verb" ]; then verb="$1"
      elif [ -z "$kind" ]; then kind="$1"
      else name="$1"; fi
      shift ;;
  esac
done

case "$verb $kind" in
  "get namespace")
    if [ -d "$root/$name" ]; then echo "namespace/$name"; exit 0; fi
    echo "Error from server (NotFound): namespaces \"$name\" not found" >&2
    exit 1 ;;
  "get taskruns.tekton.dev")
    if [ ! -d "$root/$ns" ]; then
      echo "Error from server (NotFound): namespaces \"$ns\" not found" >&2
      exit 1
    fi
    want="${selector#*=}"
    printf '{"items":['
    sep=""
    for path in "$root/$ns"/*; do
      [ -f "$path" ] || continue
      if [ -n "$selector" ] && [ "$(cat "$path")" != "$want" ]; then continue; fi
      printf '%s{"metadata":{"name":"%s"}}' "$sep" "$(basename "$path")"
      sep=","
    done
    printf ']}\n'
    exit 0 ;;
  "delete taskruns.tekton.dev")
    if [ -f "$root/$ns/$name" ]; then
      rm "$root/$ns/$name"
      echo "taskrun.tekton.dev \"$name\" deleted"
      exit 0
    fi
    echo "Error from server (NotFound): taskruns.tekton.dev \"$name\" not found" >&2
    exit 1 ;;
esac

echo "error: unsupported invocation: $verb $kind" >&2
exit 1
"##;

struct FakeCluster {
    dir: TempDir,
}

impl FakeCluster {
    /// Cluster with namespace `ns` holding tr0-1..tr0-3 for Task `random`
    fn seeded() -> Self {
        let cluster = Self::empty();
        for name in ["tr0-1", "tr0-2", "tr0-3"] {
            cluster.add("ns", name, "random");
        }
        cluster
    }

    fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("kube")).unwrap();

        let kubectl = dir.path().join("kubectl");
        fs::write(&kubectl, FAKE_KUBECTL).unwrap();
        fs::set_permissions(&kubectl, fs::Permissions::from_mode(0o755)).unwrap();

        Self { dir }
    }

    fn root(&self) -> PathBuf {
        self.dir.path().join("kube")
    }

    fn add(&self, namespace: &str, name: &str, task: &str) {
        let ns_dir = self.root().join(namespace);
        fs::create_dir_all(&ns_dir).unwrap();
        fs::write(ns_dir.join(name), task).unwrap();
    }

    fn exists(&self, namespace: &str, name: &str) -> bool {
        self.root().join(namespace).join(name).exists()
    }

    fn calls(&self) -> String {
        fs::read_to_string(self.root().join(".calls")).unwrap_or_default()
    }

    fn delete_calls(&self) -> usize {
        self.calls()
            .lines()
            .filter(|l| l.starts_with("delete "))
            .count()
    }

    /// `taskrun` isolated from the user's HOME, config and environment
    fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("taskrun"));
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("TASKRUN_KUBECTL", self.dir.path().join("kubectl"))
            .env("FAKE_KUBE_ROOT", self.root())
            .env_remove("TASKRUN_NAMESPACE")
            .env_remove("TASKRUN_CONTEXT");
        cmd
    }
}

#[test]
fn test_invalid_namespace() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["rm", "tr0-1", "-n", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: namespaces \"invalid\" not found",
        ));

    assert_eq!(cluster.delete_calls(), 0);
}

#[test]
fn test_force_delete_shorthand() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["rm", "tr0-1", "-n", "ns", "-f"])
        .assert()
        .success()
        .stdout("TaskRuns deleted: \"tr0-1\"\n");

    assert!(!cluster.exists("ns", "tr0-1"));
    assert!(cluster.exists("ns", "tr0-2"));
}

#[test]
fn test_force_delete_long_flag() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["rm", "tr0-1", "-n", "ns", "--force"])
        .assert()
        .success()
        .stdout("TaskRuns deleted: \"tr0-1\"\n");
}

#[test]
fn test_reply_no_cancels() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["rm", "tr0-1", "-n", "ns"])
        .write_stdin("n")
        .assert()
        .failure()
        .stdout("Are you sure you want to delete taskrun \"tr0-1\" (y/n): ")
        .stderr(predicate::str::contains(
            "Error: canceled deleting taskrun \"tr0-1\"",
        ));

    assert!(cluster.exists("ns", "tr0-1"));
    assert_eq!(cluster.delete_calls(), 0);
}

#[test]
fn test_reply_yes_deletes() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["rm", "tr0-1", "-n", "ns"])
        .write_stdin("y")
        .assert()
        .success()
        .stdout(
            "Are you sure you want to delete taskrun \"tr0-1\" (y/n): TaskRuns deleted: \"tr0-1\"\n",
        );

    assert!(!cluster.exists("ns", "tr0-1"));
}

#[test]
fn test_closed_stdin_cancels() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["rm", "tr0-1", "-n", "ns"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("canceled deleting taskrun"));

    assert_eq!(cluster.delete_calls(), 0);
}

#[test]
fn test_remove_nonexistent() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["rm", "nonexistent", "-n", "ns"])
        .write_stdin("y")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to delete taskrun \"nonexistent\": taskruns.tekton.dev \"nonexistent\" not found",
        ));
}

#[test]
fn test_missing_names_and_task() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["rm", "-n", "ns"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "must provide taskruns to delete or --task flag",
        ));

    // Validation happens before kubectl is invoked
    assert_eq!(cluster.calls(), "");
}

#[test]
fn test_task_filter_without_matches() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["rm", "--task", "task", "-n", "ns"])
        .write_stdin("y")
        .assert()
        .success()
        .stdout("Are you sure you want to delete all taskruns related to task \"task\" (y/n): ");

    assert_eq!(cluster.delete_calls(), 0);
}

#[test]
fn test_task_filter_deletes_only_matching() {
    let cluster = FakeCluster::seeded();
    cluster.add("ns", "tr1-1", "other");

    cluster
        .cmd()
        .args(["delete", "-t", "random", "-n", "ns", "-f"])
        .assert()
        .success()
        .stdout("All TaskRuns deleted in namespace \"ns\"\n");

    assert!(!cluster.exists("ns", "tr0-1"));
    assert!(!cluster.exists("ns", "tr0-3"));
    assert!(cluster.exists("ns", "tr1-1"));
}

#[test]
fn test_delete_all_with_prompt() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["delete", "--all", "-n", "ns"])
        .write_stdin("y")
        .assert()
        .success()
        .stdout(
            "Are you sure you want to delete all taskruns in namespace \"ns\" (y/n): All TaskRuns deleted in namespace \"ns\"\n",
        );

    assert_eq!(cluster.delete_calls(), 3);
}

#[test]
fn test_delete_all_forced() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["delete", "--all", "-f", "-n", "ns"])
        .write_stdin("y")
        .assert()
        .success()
        .stdout("All TaskRuns deleted in namespace \"ns\"\n");
}

#[test]
fn test_all_with_name_is_rejected() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["delete", "taskrun", "--all", "-n", "ns"])
        .write_stdin("y")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "--all flag should not have any arguments or flags specified with it",
        ));

    assert_eq!(cluster.calls(), "");
}

#[test]
fn test_mixed_names_report_both() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["rm", "tr0-1", "ghost", "tr0-2", "-n", "ns", "-f"])
        .assert()
        .failure()
        .stdout("TaskRuns deleted: \"tr0-1\", \"tr0-2\"\n")
        .stderr(predicate::str::contains(
            "failed to delete taskrun \"ghost\": taskruns.tekton.dev \"ghost\" not found",
        ));

    assert_eq!(cluster.delete_calls(), 3);
    assert!(cluster.exists("ns", "tr0-3"));
}

#[test]
fn test_name_starting_with_dash() {
    let cluster = FakeCluster::seeded();
    cluster.add("ns", "-x", "random");

    cluster
        .cmd()
        .args(["rm", "-n", "ns", "-f", "--", "-x"])
        .assert()
        .success()
        .stdout("TaskRuns deleted: \"-x\"\n");

    assert!(!cluster.exists("ns", "-x"));
    assert!(cluster.calls().contains("delete taskruns.tekton.dev -n ns -- -x"));
}

#[test]
fn test_dry_run() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["delete", "--all", "-n", "ns", "--dry-run"])
        .assert()
        .success()
        .stdout("Would delete taskruns: \"tr0-1\", \"tr0-2\", \"tr0-3\"\n");

    assert_eq!(cluster.delete_calls(), 0);
}

#[test]
fn test_namespace_from_project_config() {
    let cluster = FakeCluster::seeded();
    fs::write(
        cluster.dir.path().join(".taskrun.toml"),
        "[defaults]\nnamespace = \"ns\"\n",
    )
    .unwrap();

    cluster
        .cmd()
        .args(["rm", "tr0-2", "-f"])
        .assert()
        .success()
        .stdout("TaskRuns deleted: \"tr0-2\"\n");
}

#[test]
fn test_context_is_passed_to_kubectl() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["--context", "kind-ci", "rm", "tr0-1", "-n", "ns", "-f"])
        .assert()
        .success();

    assert!(cluster
        .calls()
        .lines()
        .all(|l| l.starts_with("--context kind-ci ")));
}

#[test]
fn test_verbose_echoes_kubectl_calls() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["-v", "rm", "tr0-1", "-n", "ns", "-f"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "delete taskruns.tekton.dev -n ns -- tr0-1",
        ))
        .stderr(predicate::str::contains("tr0-1: deleted"));
}

#[test]
fn test_verbose_reports_failed_item() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .args(["-v", "rm", "ghost", "-n", "ns", "-f"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "ghost: failed: taskruns.tekton.dev \"ghost\" not found",
        ))
        .stderr(predicate::str::contains("Failed {").not());
}

#[test]
fn test_missing_kubectl() {
    let cluster = FakeCluster::seeded();

    cluster
        .cmd()
        .env("TASKRUN_KUBECTL", cluster.dir.path().join("no-such-kubectl"))
        .args(["rm", "tr0-1", "-n", "ns", "-f"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("kubectl not found"));
}
