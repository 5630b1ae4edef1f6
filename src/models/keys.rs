use regex::Regex;
use std::sync::LazyLock;

/// Canonical markdown markers used when reading and writing cards.
///
/// Generation and parsing both go through these constants so the two sides
/// cannot drift apart.
pub mod markers {
    /// Header line that opens the articles section.
    pub const ARTICLES_HEADER: &str = "# Articles";

    /// Prefix of a level-one heading.
    pub const HEADING_PREFIX: &str = "# ";

    /// Prefix of a single article line.
    pub const ARTICLE_PREFIX: &str = "- ";

    /// Prefix added to free text when it becomes an article.
    pub const ARTICLE_REFERENCE_PREFIX: &str = "- article - ";

    /// Legacy note value written by older card templates; never kept.
    pub const PLACEHOLDER_NOTE: &str = "{custom text}";

    /// Source URLs recognized on their own line.
    pub const SOURCE_URL_PREFIX: &str = "https://en.wiktionary.org/wiki/";

    /// Card file extension, without the dot.
    pub const CARD_EXTENSION: &str = "md";

    /// Suffix appended to the file name of a backed-up card.
    pub const BACKUP_SUFFIX: &str = ".bak";
}

/// Grammatical categories that open a word section.
pub const WORD_TYPES: &[&str] = &["noun", "verb", "adjective", "adverb", "pronoun"];

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W").expect("Invalid non-word regex"));

/// Characters replaced with `_` when turning a key into a file name.
const FORBIDDEN_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Returns true if `word_type` is a recognized grammatical category.
pub fn is_word_type(word_type: &str) -> bool {
    WORD_TYPES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(word_type))
}

/// Normalize a key into the file stem used inside every stage directory.
///
/// # Examples
///
/// ```
/// use wordcard::models::keys::normalize_key;
///
/// assert_eq!(normalize_key("kala"), "kala");
/// assert_eq!(normalize_key(" a/b? "), "a_b_");
/// ```
pub fn normalize_key(key: &str) -> String {
    let replaced: String = key
        .chars()
        .map(|c| {
            if FORBIDDEN_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();
    replaced.trim().to_string()
}

/// File name (`<normalized-key>.md`) for a key.
pub fn card_filename(key: &str) -> String {
    format!("{}.{}", normalize_key(key), markers::CARD_EXTENSION)
}

/// Tag text as it appears after `#` on the tag line.
///
/// Characters outside `\w` end a hashtag when the card is read back, so they
/// become `_`. A leading `#` is dropped.
pub fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim().trim_start_matches('#');
    NON_WORD_RE.replace_all(tag, "_").into_owned()
}
