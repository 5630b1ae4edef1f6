use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::open_manager;

pub fn execute(config_path: &Path, key: String) -> Result<()> {
    let manager = open_manager(config_path)?;

    match manager.find(&key)? {
        Some(card) => println!(
            "{} {} [{}]",
            card.path.display(),
            "─".dimmed(),
            card.stage.to_string().cyan()
        ),
        None => println!("{} No wordcard found for '{}'", "─".dimmed(), key),
    }

    Ok(())
}
