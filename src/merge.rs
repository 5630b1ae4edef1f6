//! Combining an existing card with newly supplied content.
//!
//! Existing content always wins: the source URL is only filled when empty and
//! a word section whose type is already filed is left untouched, so incoming
//! content for that type is dropped. Tags are unioned. Articles are deduplicated
//! by exact string match only.

use crate::models::keys::markers::{ARTICLE_PREFIX, ARTICLE_REFERENCE_PREFIX};
use crate::models::{IncomingRecord, VocabEntry};
use crate::parser::hashtags;

/// Format free text as an article line, leaving `- ...` lines as they are.
pub fn to_article_line(text: &str) -> String {
    let text = text.trim();
    if text.starts_with(ARTICLE_PREFIX) {
        text.to_string()
    } else {
        format!("{ARTICLE_REFERENCE_PREFIX}{text}")
    }
}

fn push_article(entry: &mut VocabEntry, article: String) -> bool {
    if entry.articles.contains(&article) {
        return false;
    }
    entry.articles.push(article);
    true
}

/// Fold the legacy note and `article_text` into the articles section.
///
/// A real note is converted to an article and cleared, so later calls never
/// see it again. Blank `article_text` adds nothing.
pub fn merge_article(entry: &mut VocabEntry, article_text: &str) {
    if entry.has_note() {
        let article = to_article_line(&entry.note);
        tracing::info!(key = %entry.key, article = %article, "converted legacy note to article");
        push_article(entry, article);
        entry.note.clear();
    }

    if article_text.trim().is_empty() {
        return;
    }

    let article = to_article_line(article_text);
    if push_article(entry, article) {
        tracing::info!(key = %entry.key, "appended article");
    } else {
        tracing::debug!(key = %entry.key, "article already present, skipped");
    }
}

/// Merge an incoming record into an existing card.
pub fn merge_entries(existing: &mut VocabEntry, incoming: &IncomingRecord) {
    if existing.source_url.is_empty() && !incoming.url.is_empty() {
        existing.source_url = incoming.url.clone();
    }

    for tag in &incoming.tags {
        existing.add_tag(tag);
    }

    for section in &incoming.sections {
        if existing.has_section(&section.word_type) {
            tracing::debug!(
                key = %existing.key,
                word_type = %section.word_type,
                "section already filed, keeping existing content"
            );
            continue;
        }
        existing.sections.push(section.clone());
    }
}

/// Add hashtags used inside article lines to the card's tags.
///
/// Returns the tags that were newly added.
pub fn harvest_article_tags(entry: &mut VocabEntry) -> Vec<String> {
    let found: Vec<String> = entry
        .articles
        .iter()
        .flat_map(|article| hashtags(article))
        .map(str::to_string)
        .collect();

    found
        .into_iter()
        .filter(|tag| entry.add_tag(tag))
        .collect()
}
