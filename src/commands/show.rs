use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::open_manager;
use crate::models::VocabEntry;
use crate::parser::parse_file;

/// Human-readable summary of a parsed card.
pub fn format_entry(entry: &VocabEntry) -> String {
    let mut output = String::new();

    let tags = if entry.tags.is_empty() {
        "(none)".to_string()
    } else {
        entry
            .tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    output.push_str(&format!("{} {}\n", "Tags:".cyan(), tags));

    if !entry.source_url.is_empty() {
        output.push_str(&format!("{} {}\n", "Source:".cyan(), entry.source_url));
    }

    if entry.has_note() {
        output.push_str(&format!("{} {}\n", "Note:".cyan(), entry.note));
    }

    for section in &entry.sections {
        output.push_str(&format!(
            "\n{} ({} lines)\n",
            section.word_type.bold(),
            section.content.len()
        ));
        for line in &section.content {
            output.push_str(&format!("  {line}\n"));
        }
    }

    if !entry.articles.is_empty() {
        output.push_str(&format!("\n{}\n", "Articles".bold()));
        for article in &entry.articles {
            output.push_str(&format!("  {article}\n"));
        }
    }

    output
}

pub fn execute(config_path: &Path, key: String) -> Result<()> {
    let manager = open_manager(config_path)?;

    let Some(card) = manager.find(&key)? else {
        println!("{} No wordcard found for '{}'", "─".dimmed(), key);
        return Ok(());
    };

    let parsed = parse_file(&card.path);
    if let Some(error) = &parsed.error {
        println!("{} {}", "!".yellow().bold(), error);
    }

    println!(
        "{} {} [{}]\n{}",
        key.bold(),
        "─".dimmed(),
        card.stage.to_string().cyan(),
        "─".repeat(40)
    );
    print!("{}", format_entry(&parsed.entry));

    Ok(())
}
