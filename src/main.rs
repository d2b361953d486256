#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use taskrun_cli::cli::{Cli, Commands, ConfigCommands};
use taskrun_cli::commands;
use taskrun_cli::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validation reports on broken config files itself, so it must not
    // depend on loading them successfully first
    if let Commands::Config {
        command: command @ ConfigCommands::Validate { .. },
    } = &cli.command
    {
        commands::config::execute(command, &Config::default())?;
        return Ok(());
    }

    let project_root = std::env::current_dir()?;
    let config = Config::load(&project_root)?.with_cli_overrides(&cli);

    match &cli.command {
        Commands::Delete(cmd) => {
            commands::delete::execute(&config, cmd)?;
        }
        Commands::Config { command } => {
            commands::config::execute(command, &config)?;
        }
    }

    Ok(())
}
