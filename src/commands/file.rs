use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use super::open_manager;
use crate::models::IncomingRecord;

/// Read an incoming record from a JSON file, or `-` for stdin.
pub fn read_record(path: &Path) -> Result<IncomingRecord> {
    let content = if path == Path::new("-") {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read record from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read record file: {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse record JSON: {}", path.display()))
}

pub fn execute(
    config_path: &Path,
    key: String,
    record: Option<&Path>,
    article: Option<String>,
) -> Result<()> {
    let manager = open_manager(config_path)?;
    let incoming = match record {
        Some(path) => read_record(path)?,
        None => IncomingRecord::default(),
    };

    let outcome = manager
        .process(&key, &incoming, article.as_deref().unwrap_or(""))
        .with_context(|| format!("Failed to file wordcard for '{key}'"))?;

    if outcome.parse_failed {
        println!(
            "{} Existing card for '{}' could not be read; it was rebuilt from the new content",
            "!".yellow().bold(),
            key
        );
    }

    if outcome.was_moved {
        println!(
            "{} Moved '{}' back to {}",
            "↺".cyan(),
            key.bold(),
            outcome.stage.to_string().cyan()
        );
    }

    if let Some(stale) = &outcome.stale_source {
        println!(
            "{} Old card could not be removed: {}",
            "!".yellow().bold(),
            stale.display()
        );
    }

    println!(
        "{} Wordcard saved to: {}",
        "✓".green().bold(),
        outcome.path.display()
    );

    Ok(())
}
