use crate::cli::ConfigCommands;
use crate::config::{global_config_path, Config, CONFIG_FILE_NAME};
use crate::error::Result;
use std::path::Path;

pub fn execute(command: &ConfigCommands, config: &Config) -> Result<()> {
    match command {
        ConfigCommands::Validate { file } => match file {
            Some(path) => validate_file(path),
            None => validate(),
        },
        ConfigCommands::Show => show(config),
    }
}

fn validate_file(path: &Path) -> Result<()> {
    println!("Validating {}...", path.display());
    match Config::from_file(path) {
        Ok(_) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            Err(e)
        }
    }
}

fn validate() -> Result<()> {
    let project_root = std::env::current_dir()?;
    let project_config = project_root.join(CONFIG_FILE_NAME);

    println!("Validating configuration files...\n");

    match global_config_path() {
        Some(global_config) if global_config.exists() => {
            println!("  Global config: {}", global_config.display())
        }
        Some(global_config) => println!(
            "  Global config: {} - not found (optional)",
            global_config.display()
        ),
        None => println!("  Global config: HOME is not set - skipped"),
    }

    if project_config.exists() {
        println!("  Project config: {}", project_config.display());
    } else {
        println!(
            "  Project config: {} - not found (optional)",
            project_config.display()
        );
    }

    println!("\nLoading and validating configuration...");
    match Config::load(&project_root) {
        Ok(_) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            Err(e)
        }
    }
}

fn show(config: &Config) -> Result<()> {
    println!("Effective Configuration:");
    println!("(CLI > Environment > Project config > Global config > Defaults)\n");

    println!("kubectl:");
    println!("  binary: {}", config.kubectl.binary);
    match config.kubectl.kubeconfig_path() {
        Some(path) => println!("  kubeconfig: {}", path.display()),
        None => println!("  kubeconfig: (kubectl default)"),
    }
    println!(
        "  context: {}",
        config.kubectl.context.as_deref().unwrap_or("(current)")
    );

    println!("\nDefaults:");
    println!("  namespace: {}", config.defaults.namespace);

    Ok(())
}
