//! Writing cards back to markdown.
//!
//! Layout, one item per line:
//!
//! ```text
//!                       (blank first line)
//! #tag1 #tag2           (only if tags)
//! https://...           (only if a source URL)
//! legacy note           (only if a real note)
//! # noun                (each word section, in order)
//! ...content lines...
//! # Articles            (only if articles)
//! - article - ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OutputConfig;
use crate::error::VaultError;
use crate::models::keys::markers::{ARTICLES_HEADER, BACKUP_SUFFIX, HEADING_PREFIX};
use crate::models::VocabEntry;

/// Render `entry` as card markdown.
///
/// Order: optional `# <title>`, a blank line, tags, source URL, note, word
/// sections, articles.
pub fn render(entry: &VocabEntry) -> String {
    let mut lines: Vec<String> = Vec::new();
    if !entry.title.is_empty() {
        lines.push(format!("{HEADING_PREFIX}{}", entry.title));
    }
    lines.push(String::new());

    if !entry.tags.is_empty() {
        let tag_line: Vec<String> = entry.tags.iter().map(|t| format!("#{t}")).collect();
        lines.push(tag_line.join(" "));
    }

    if !entry.source_url.is_empty() {
        lines.push(entry.source_url.clone());
    }

    if entry.has_note() {
        lines.push(entry.note.clone());
    }

    for section in &entry.sections {
        lines.push(format!("{HEADING_PREFIX}{}", section.word_type));
        lines.extend(section.content.iter().cloned());
    }

    if !entry.articles.is_empty() {
        lines.push(ARTICLES_HEADER.to_string());
        lines.extend(entry.articles.iter().cloned());
    }

    lines.join("\n")
}

/// Sibling path an existing card is moved to before being overwritten.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Write `entry` to `target`, replacing any existing file.
///
/// With `backup_existing`, an existing target is first renamed to
/// [`backup_path`]. The rename and the write are separate steps: if the write
/// fails, only the backup remains.
pub fn save(entry: &VocabEntry, target: &Path, output: &OutputConfig) -> Result<(), VaultError> {
    let save_err = |source: std::io::Error| VaultError::Save {
        path: target.to_path_buf(),
        source,
    };

    if output.create_directories {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(save_err)?;
        }
    }

    if output.backup_existing && target.exists() {
        let backup = backup_path(target);
        fs::rename(target, &backup).map_err(save_err)?;
        tracing::info!(backup = %backup.display(), "backed up existing wordcard");
    }

    fs::write(target, render(entry)).map_err(|source| {
        tracing::error!(path = %target.display(), error = %source, "failed to save wordcard");
        save_err(source)
    })?;

    tracing::info!(key = %entry.key, path = %target.display(), "saved wordcard");
    Ok(())
}
