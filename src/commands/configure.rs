use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::{update_config, ConfigUpdate};

pub fn execute(config_path: &Path, update: ConfigUpdate) -> Result<()> {
    if update.is_empty() {
        println!("{} No configuration changes specified.", "─".dimmed());
        return Ok(());
    }

    if let Some(path) = &update.vault_path {
        if !Path::new(path).is_dir() {
            eprintln!(
                "{} Vault path does not exist: {}",
                "Warning:".yellow().bold(),
                path
            );
        }
    }

    let config = update_config(config_path, &update)?;
    println!(
        "{} Configuration saved to {}",
        "✓".green().bold(),
        config_path.display()
    );

    if config.is_vault_configured() {
        println!("{} Vault is configured and accessible", "✓".green());
    } else {
        println!("{} Vault is not configured or not accessible", "⚠".yellow());
    }

    Ok(())
}
