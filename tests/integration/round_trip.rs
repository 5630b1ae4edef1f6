//! Saved cards parse back to the same entry

use wordcard::config::OutputConfig;
use wordcard::fs::{render, save};
use wordcard::models::{VocabEntry, WordSection};
use wordcard::parser::{parse_file, parse_str};

use super::helpers::TestVault;

fn sample_entry() -> VocabEntry {
    let mut entry = VocabEntry::new("juosta");
    entry.add_tag("verb");
    entry.add_tag("finnish");
    entry.source_url = "https://en.wiktionary.org/wiki/juosta".to_string();
    entry.note = "irregular in the past tense".to_string();
    entry.sections.push(WordSection::new(
        "verb",
        vec![
            "1. to run".to_string(),
            String::new(),
            "```".to_string(),
            "juoksen, juokset".to_string(),
            "```".to_string(),
        ],
    ));
    entry.articles.push("- article - Hän juoksee.".to_string());
    entry
}

#[test]
fn test_save_then_parse_preserves_entry() {
    let vault = TestVault::new();
    let entry = sample_entry();
    let path = vault.dir.path().join("New").join("juosta.md");

    save(&entry, &path, &OutputConfig::default()).unwrap();
    let parsed = parse_file(&path);

    assert!(parsed.error.is_none());
    assert_eq!(parsed.entry, entry);
}

#[test]
fn test_render_is_stable_across_reparse() {
    let entry = sample_entry();
    let first = render(&entry);
    let second = render(&parse_str("juosta", &first));
    assert_eq!(first, second);
}

#[test]
fn test_punctuated_tags_survive_reparse() {
    let mut entry = VocabEntry::new("kala");
    entry.add_tag("kotus-10");
    entry.add_tag("finnish.vocab");

    let reparsed = parse_str("kala", &render(&entry));
    assert_eq!(reparsed.tags, entry.tags);
    assert_eq!(reparsed.tags, vec!["kotus_10", "finnish_vocab"]);
}

#[test]
fn test_title_heading_survives_save_and_parse() {
    let vault = TestVault::new();
    let mut entry = sample_entry();
    entry.title = "juosta".to_string();
    let path = vault.dir.path().join("New").join("juosta.md");

    save(&entry, &path, &OutputConfig::default()).unwrap();
    assert_eq!(parse_file(&path).entry, entry);
}
