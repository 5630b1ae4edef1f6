use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::{load_config, Config};
use crate::models::StageName;

fn flag(value: bool) -> String {
    if value {
        "on".green().to_string()
    } else {
        "off".dimmed().to_string()
    }
}

/// Status report for `config`, as printed by `wordcard status`.
pub fn format_status(config: &Config, config_path: &Path) -> String {
    let mut lines = vec![
        format!("{}", "Wordcard Configuration".bold()),
        "─".repeat(40),
        format!("{} {}", "Config file:".cyan(), config_path.display()),
    ];

    match config.vault_path() {
        Some(path) => {
            lines.push(format!("{} {}", "Vault path:".cyan(), path.display()));
            if let Some(name) = config.vault_name() {
                lines.push(format!("{} {}", "Vault name:".cyan(), name));
            }
            let status = if config.is_vault_configured() {
                format!("{} Configured and accessible", "✓".green())
            } else {
                format!("{} Path not accessible", "⚠".yellow())
            };
            lines.push(format!("{} {}", "Vault status:".cyan(), status));
        }
        None => lines.push(format!("{} {} Not configured", "Vault status:".cyan(), "✗".red())),
    }

    lines.push(String::new());
    for stage in StageName::SEARCH_ORDER {
        lines.push(format!(
            "{} {}",
            format!("{stage} stage:").cyan(),
            config.vault.learning_stages.dir_name(stage)
        ));
    }

    let fm = &config.file_management;
    lines.push(String::new());
    lines.push(format!("{} {}", "Check existing:".cyan(), flag(fm.check_existing)));
    lines.push(format!("{} {}", "Append articles:".cyan(), flag(fm.append_articles)));
    lines.push(format!("{} {}", "Harvest article tags:".cyan(), flag(fm.harvest_article_tags)));
    lines.push(format!("{} {}", "Lock keys:".cyan(), flag(fm.lock_keys)));
    lines.push(format!(
        "{} {}",
        "Create directories:".cyan(),
        flag(config.output.create_directories)
    ));
    lines.push(format!(
        "{} {}",
        "Backup existing:".cyan(),
        flag(config.output.backup_existing)
    ));

    lines.join("\n")
}

pub fn execute(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    println!("{}", format_status(&config, config_path));
    Ok(())
}
