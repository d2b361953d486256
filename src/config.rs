use crate::cli::Cli;
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".taskrun.toml";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub kubectl: KubectlConfig,

    pub defaults: DefaultsConfig,

    /// Echo store calls to stderr (not stored in config file)
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct KubectlConfig {
    pub binary: String,

    /// Path to a kubeconfig file; `~` is expanded
    pub kubeconfig: Option<String>,

    pub context: Option<String>,
}

impl Default for KubectlConfig {
    fn default() -> Self {
        Self {
            binary: "kubectl".to_string(),
            kubeconfig: None,
            context: None,
        }
    }
}

impl KubectlConfig {
    /// Kubeconfig path with tilde expansion applied
    pub fn kubeconfig_path(&self) -> Option<PathBuf> {
        self.kubeconfig.as_ref().map(|path| {
            crate::utils::path::expand_tilde(path).unwrap_or_else(|| PathBuf::from(path))
        })
    }
}

#[derive(Debug, Clone)]
pub struct DefaultsConfig {
    pub namespace: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            namespace: "default".to_string(),
        }
    }
}

/// One config file as written on disk.
///
/// Every key is optional: a key that is present overrides lower layers even
/// when it repeats the built-in default, a missing key leaves them alone.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub kubectl: KubectlFile,

    #[serde(default)]
    pub defaults: DefaultsFile,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct KubectlFile {
    pub binary: Option<String>,
    pub kubeconfig: Option<String>,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DefaultsFile {
    pub namespace: Option<String>,
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_cli_overrides)
    /// 2. Environment variables
    /// 3. Project config (.taskrun.toml in the working directory)
    /// 4. Global config (~/.taskrun.toml)
    /// 5. Built-in defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_config) = global_config_path() {
            if global_config.exists() {
                config = config.merge(Self::from_file(&global_config)?);
            }
        }

        let project_config = project_root.join(CONFIG_FILE_NAME);
        if project_config.exists() {
            config = config.merge(Self::from_file(&project_config)?);
        }

        Ok(config.merge_env())
    }

    /// Load one configuration layer from a TOML file
    pub fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&contents)?;
        Ok(file)
    }

    /// Apply a file layer on top of this config (keys set in the file win)
    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(binary) = file.kubectl.binary {
            self.kubectl.binary = binary;
        }
        if file.kubectl.kubeconfig.is_some() {
            self.kubectl.kubeconfig = file.kubectl.kubeconfig;
        }
        if file.kubectl.context.is_some() {
            self.kubectl.context = file.kubectl.context;
        }
        if let Some(namespace) = file.defaults.namespace {
            self.defaults.namespace = namespace;
        }

        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Self {
        if let Some(binary) = non_empty_env("TASKRUN_KUBECTL") {
            self.kubectl.binary = binary;
        }
        if let Some(context) = non_empty_env("TASKRUN_CONTEXT") {
            self.kubectl.context = Some(context);
        }
        if let Some(namespace) = non_empty_env("TASKRUN_NAMESPACE") {
            self.defaults.namespace = namespace;
        }

        self
    }

    /// Apply CLI overrides (highest precedence)
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        self.verbose = cli.verbose;

        if let Some(ref kubeconfig) = cli.connection.kubeconfig {
            self.kubectl.kubeconfig = Some(kubeconfig.to_string_lossy().to_string());
        }
        if let Some(ref context) = cli.connection.context {
            self.kubectl.context = Some(context.clone());
        }

        self
    }

    /// Namespace to operate in: explicit flag, else the configured default
    pub fn namespace(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .unwrap_or_else(|| self.defaults.namespace.clone())
    }
}

/// Location of the per-user config file
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
