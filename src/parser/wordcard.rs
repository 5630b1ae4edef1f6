//! Card markdown to [`VocabEntry`].
//!
//! A single forward pass over the lines drives `ParseState`:
//!
//! - `Preamble`: before any heading. Holds the tag line(s), the source URL
//!   and at most one legacy note line.
//! - `WordSection(i)`: after `# <word type>`. Every line until the next
//!   `# ` heading is appended verbatim to section `i`, fences included.
//! - `Articles`: after `# Articles`. Lines starting with `- ` are articles.
//! - `Unrecognized`: after any other `# ` heading once a section has opened.
//!   Lines are dropped until the next heading.
//!
//! Any other `# ` heading inside the preamble is the card title (`# kala`)
//! and leaves the parser in `Preamble`; the first one is kept as the title.
//!
//! Headings are detected on the trimmed line; `# Articles` and word-type
//! headings may appear in any order.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::ParseError;
use crate::models::keys::is_word_type;
use crate::models::keys::markers::{
    ARTICLES_HEADER, ARTICLE_PREFIX, HEADING_PREFIX, PLACEHOLDER_NOTE, SOURCE_URL_PREFIX,
};
use crate::models::{VocabEntry, WordSection};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("Invalid tag regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Preamble,
    WordSection(usize),
    Articles,
    Unrecognized,
}

/// Outcome of reading a card from disk.
///
/// `error` is set when the file could not be read; `entry` is then an empty
/// card keyed by the file stem.
#[derive(Debug)]
pub struct ParsedCard {
    pub entry: VocabEntry,
    pub error: Option<ParseError>,
}

/// Read and parse the card at `path`. Never fails; see [`ParsedCard`].
pub fn parse_file(path: &Path) -> ParsedCard {
    let key = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match fs::read_to_string(path) {
        Ok(content) => {
            let entry = parse_str(&key, &content);
            tracing::debug!(
                path = %path.display(),
                sections = entry.sections.len(),
                articles = entry.articles.len(),
                "parsed wordcard"
            );
            ParsedCard { entry, error: None }
        }
        Err(source) => {
            let error = ParseError {
                path: path.to_path_buf(),
                source,
            };
            tracing::error!(%error, "falling back to an empty wordcard");
            ParsedCard {
                entry: VocabEntry::new(key),
                error: Some(error),
            }
        }
    }
}

/// Parse card markdown for `key`.
pub fn parse_str(key: &str, content: &str) -> VocabEntry {
    let mut entry = VocabEntry::new(key);
    let mut state = ParseState::Preamble;

    for raw in content.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = line.trim();

        if trimmed == ARTICLES_HEADER {
            state = ParseState::Articles;
            continue;
        }

        if let Some(heading) = trimmed.strip_prefix(HEADING_PREFIX) {
            let heading = heading.trim();
            state = if is_word_type(heading) {
                entry.sections.push(WordSection::new(heading, Vec::new()));
                ParseState::WordSection(entry.sections.len() - 1)
            } else if state == ParseState::Preamble {
                if entry.title.is_empty() {
                    entry.title = heading.to_string();
                }
                ParseState::Preamble
            } else {
                tracing::debug!(heading, "skipping unrecognized heading");
                ParseState::Unrecognized
            };
            continue;
        }

        match state {
            ParseState::Preamble => read_preamble_line(&mut entry, trimmed),
            ParseState::WordSection(index) => {
                entry.sections[index].content.push(line.to_string());
            }
            ParseState::Articles => {
                if line.starts_with(ARTICLE_PREFIX) {
                    entry.articles.push(line.to_string());
                }
            }
            ParseState::Unrecognized => {}
        }
    }

    entry
}

fn read_preamble_line(entry: &mut VocabEntry, line: &str) {
    if line.is_empty() {
        return;
    }

    if is_tag_line(line) {
        for tag in hashtags(line) {
            entry.add_tag(tag);
        }
        return;
    }

    if is_source_url(line) {
        if entry.source_url.is_empty() {
            entry.source_url = line.to_string();
        }
        return;
    }

    if entry.note.is_empty() && is_note_candidate(line) {
        entry.note = line.to_string();
    }
}

/// Every `#word` token in `line`, without the hash.
pub fn hashtags(line: &str) -> impl Iterator<Item = &str> {
    TAG_RE
        .captures_iter(line)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
}

/// `#tag ...` but not `# heading` or `## heading`.
fn is_tag_line(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('#') && chars.next().is_some_and(|c| c != '#' && !c.is_whitespace())
}

fn is_source_url(line: &str) -> bool {
    line.strip_prefix(SOURCE_URL_PREFIX)
        .is_some_and(|rest| !rest.is_empty() && !rest.contains(char::is_whitespace))
}

/// Structural lines (headings, fences, links, list items) never become notes.
fn is_note_candidate(line: &str) -> bool {
    line != PLACEHOLDER_NOTE
        && !line.starts_with('#')
        && !line.starts_with("```")
        && !line.starts_with("https://")
        && !line.starts_with('-')
}
