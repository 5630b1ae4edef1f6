use serde::{Deserialize, Serialize};

use super::keys::markers::PLACEHOLDER_NOTE;
use super::keys::normalize_tag;

/// Content scoped to one grammatical category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSection {
    /// Category as written in the header, e.g. `noun`.
    #[serde(rename = "type")]
    pub word_type: String,
    /// Lines under the header, kept verbatim.
    #[serde(default)]
    pub content: Vec<String>,
}

impl WordSection {
    pub fn new(word_type: impl Into<String>, content: Vec<String>) -> Self {
        Self {
            word_type: word_type.into(),
            content,
        }
    }

    /// Categories compare case-insensitively.
    pub fn has_type(&self, word_type: &str) -> bool {
        self.word_type.eq_ignore_ascii_case(word_type)
    }
}

/// Freshly extracted content handed over for filing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingRecord {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub sections: Vec<WordSection>,
}

/// Structured content of one card.
///
/// Built on every filing call, either parsed from disk or from an incoming
/// record. Its only persistent form is the markdown file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabEntry {
    pub key: String,
    /// Text of a leading `# <word>` title heading; empty when the card has none.
    pub title: String,
    /// Unique, order not significant.
    pub tags: Vec<String>,
    /// Empty when unknown.
    pub source_url: String,
    /// Single legacy free-text line; empty when absent.
    pub note: String,
    pub sections: Vec<WordSection>,
    pub articles: Vec<String>,
}

impl VocabEntry {
    /// Empty card for `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Card built from an incoming record, with duplicate tags dropped.
    pub fn from_record(key: impl Into<String>, record: &IncomingRecord) -> Self {
        let mut entry = Self::new(key);
        for tag in &record.tags {
            entry.add_tag(tag);
        }
        entry.source_url = record.url.clone();
        entry.sections = record.sections.clone();
        entry
    }

    /// Add a tag unless already present. Returns true if it was added.
    ///
    /// The tag is stored in the form it takes on the tag line, see
    /// [`normalize_tag`].
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = normalize_tag(tag);
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn has_section(&self, word_type: &str) -> bool {
        self.sections.iter().any(|s| s.has_type(word_type))
    }

    pub fn section(&self, word_type: &str) -> Option<&WordSection> {
        self.sections.iter().find(|s| s.has_type(word_type))
    }

    /// True when the note holds real text rather than nothing or the template placeholder.
    pub fn has_note(&self) -> bool {
        let note = self.note.trim();
        !note.is_empty() && note != PLACEHOLDER_NOTE
    }
}
