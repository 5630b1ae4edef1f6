//! End-to-end filing through `WordcardManager::process`

use std::fs;

use wordcard::models::{IncomingRecord, StageName, WordSection};
use wordcard::parser::parse_file;

use super::helpers::{kala_record, TestVault};

#[test]
fn test_new_word_lands_in_new_stage() {
    let vault = TestVault::new();
    let outcome = vault.manager().process("kala", &kala_record(), "").unwrap();

    assert_eq!(outcome.stage, StageName::New);
    assert!(!outcome.was_moved);
    assert_eq!(outcome.path, vault.stage_path(StageName::New, "kala.md"));

    let content = vault.read(StageName::New, "kala.md");
    let lines: Vec<&str> = content.split('\n').collect();
    assert!(lines.contains(&"#noun"));
    assert!(lines.contains(&"https://en.wiktionary.org/wiki/kala"));
    assert!(lines.contains(&"# noun"));
    assert!(lines.contains(&"1. fish"));
    assert!(!content.contains("# Articles"));
}

#[test]
fn test_remembered_word_moves_back_to_new_with_both_articles() {
    let vault = TestVault::new();
    let old = vault.seed(
        StageName::Remembered,
        "kala.md",
        "\n#noun\n# noun\n1. fish\n# Articles\n- article - old",
    );

    let outcome = vault
        .manager()
        .process("kala", &IncomingRecord::default(), "- article - new")
        .unwrap();

    assert!(outcome.was_moved);
    assert_eq!(outcome.stage, StageName::New);
    assert!(outcome.stale_source.is_none());
    assert!(!old.exists());

    let content = vault.read(StageName::New, "kala.md");
    assert!(content.contains("- article - old"));
    assert!(content.contains("- article - new"));
    assert!(content.contains("1. fish"));
}

#[test]
fn test_same_article_filed_twice_is_stored_once() {
    let vault = TestVault::new();
    let manager = vault.manager();

    manager.process("kala", &kala_record(), "Kala ui.").unwrap();
    manager.process("kala", &kala_record(), "Kala ui.").unwrap();

    let content = vault.read(StageName::New, "kala.md");
    assert_eq!(content.matches("- article - Kala ui.").count(), 1);
    assert_eq!(content.matches("# noun").count(), 1);
}

#[test]
fn test_existing_sections_win_over_incoming() {
    let vault = TestVault::new();
    vault.seed(StageName::Memorizing, "kala.md", "\n#noun\n# noun\n1. fish (mine)");

    let incoming = IncomingRecord {
        tags: vec!["noun".into(), "finnish".into()],
        url: "https://en.wiktionary.org/wiki/kala".into(),
        sections: vec![
            WordSection::new("noun", vec!["1. fish".into()]),
            WordSection::new("verb", vec!["1. to fish".into()]),
        ],
    };
    vault.manager().process("kala", &incoming, "").unwrap();

    let parsed = parse_file(&vault.stage_path(StageName::New, "kala.md"));
    let entry = parsed.entry;
    assert_eq!(entry.tags, vec!["noun", "finnish"]);
    assert_eq!(entry.source_url, "https://en.wiktionary.org/wiki/kala");
    assert_eq!(entry.section("noun").unwrap().content, vec!["1. fish (mine)"]);
    assert_eq!(entry.section("verb").unwrap().content, vec!["1. to fish"]);
}

#[test]
fn test_titled_card_keeps_preamble() {
    let vault = TestVault::new();
    vault.seed(
        StageName::Memorizing,
        "kala.md",
        "# kala\n\n#noun #kotus_10\nhttps://en.wiktionary.org/wiki/kala\nheard at the market\n# noun\n1. fish",
    );

    vault
        .manager()
        .process("kala", &IncomingRecord::default(), "Kala ui.")
        .unwrap();

    let content = vault.read(StageName::New, "kala.md");
    assert_eq!(
        content,
        "# kala\n\n#noun #kotus_10\nhttps://en.wiktionary.org/wiki/kala\n# noun\n1. fish\n# Articles\n- article - heard at the market\n- article - Kala ui."
    );
}

#[test]
fn test_user_note_becomes_first_article() {
    let vault = TestVault::new();
    vault.seed(
        StageName::New,
        "kala.md",
        "\n#noun\nheard this at the market\n# noun\n1. fish",
    );

    vault
        .manager()
        .process("kala", &IncomingRecord::default(), "Kala ui.")
        .unwrap();

    let parsed = parse_file(&vault.stage_path(StageName::New, "kala.md"));
    assert!(parsed.entry.note.is_empty());
    assert_eq!(
        parsed.entry.articles,
        vec!["- article - heard this at the market", "- article - Kala ui."]
    );
}

#[test]
fn test_placeholder_note_is_not_converted() {
    let vault = TestVault::new();
    vault.seed(StageName::New, "kala.md", "\n#noun\n{custom text}\n# noun\n1. fish");

    vault
        .manager()
        .process("kala", &IncomingRecord::default(), "Kala ui.")
        .unwrap();

    let content = vault.read(StageName::New, "kala.md");
    assert!(!content.contains("{custom text}"));
    assert_eq!(content.matches("- article - ").count(), 1);
}

#[test]
fn test_case_insensitive_match_is_rewritten_under_key() {
    let vault = TestVault::new();
    let old = vault.seed(StageName::Remembered, "Kala.md", "\n#noun\n# noun\n1. fish");

    let outcome = vault
        .manager()
        .process("kala", &IncomingRecord::default(), "")
        .unwrap();

    assert!(outcome.was_moved);
    assert!(!old.exists());
    assert_eq!(outcome.path, vault.stage_path(StageName::New, "kala.md"));
}

#[test]
fn test_backup_kept_when_enabled() {
    let mut vault = TestVault::new();
    vault.config.output.backup_existing = true;
    vault.seed(StageName::New, "kala.md", "\n#noun\n# noun\n1. fish");

    vault
        .manager()
        .process("kala", &IncomingRecord::default(), "Kala ui.")
        .unwrap();

    let backup = vault.stage_path(StageName::New, "kala.md.bak");
    assert_eq!(fs::read_to_string(backup).unwrap(), "\n#noun\n# noun\n1. fish");
}

#[test]
fn test_check_existing_disabled_overwrites_in_new() {
    let mut vault = TestVault::new();
    vault.config.file_management.check_existing = false;
    let remembered = vault.seed(StageName::Remembered, "kala.md", "\n#old\n# noun\n1. old");

    let outcome = vault.manager().process("kala", &kala_record(), "").unwrap();

    assert!(!outcome.was_moved);
    assert!(remembered.exists());
    let content = vault.read(StageName::New, "kala.md");
    assert!(content.contains("1. fish"));
    assert!(!content.contains("#old"));
}

#[test]
fn test_harvested_article_tags_reach_the_card() {
    let mut vault = TestVault::new();
    vault.config.file_management.harvest_article_tags = true;

    vault
        .manager()
        .process("kala", &kala_record(), "Kala ui #verbs #reading")
        .unwrap();

    let parsed = parse_file(&vault.stage_path(StageName::New, "kala.md"));
    assert_eq!(parsed.entry.tags, vec!["noun", "verbs", "reading"]);
}

#[test]
fn test_locked_filing_releases_lock() {
    let mut vault = TestVault::new();
    vault.config.file_management.lock_keys = true;
    let manager = vault.manager();

    manager.process("kala", &kala_record(), "one").unwrap();
    manager.process("kala", &kala_record(), "two").unwrap();

    let content = vault.read(StageName::New, "kala.md");
    assert!(content.contains("- article - one"));
    assert!(content.contains("- article - two"));
}

#[test]
fn test_unreadable_card_reports_parse_failure() {
    let vault = TestVault::new();
    let path = vault.stage_path(StageName::Memorizing, "kala.md");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, [0xc3, 0x28, 0x0a]).unwrap();

    let outcome = vault.manager().process("kala", &kala_record(), "").unwrap();

    assert!(outcome.parse_failed);
    assert_eq!(outcome.path, vault.stage_path(StageName::New, "kala.md"));
    assert!(!path.exists());
    assert!(vault.read(StageName::New, "kala.md").contains("1. fish"));
}
