//! Filing an incoming record into the vault.
//!
//! [`WordcardManager::process`] runs locate -> parse -> merge -> resolve stage
//! -> save. The whole sequence is synchronous and, unless `lock_keys` is set,
//! unprotected against a second writer of the same key.
//!
//! When a card moves stages its source file is deleted before the new file is
//! written. A save failure after that delete loses the previous content.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::VaultError;
use crate::fs::{self as vault_fs, KeyLock, LocatedCard, StageRegistry};
use crate::merge::{harvest_article_tags, merge_article, merge_entries};
use crate::models::{resolve, IncomingRecord, StageName, VocabEntry};
use crate::parser::parse_file;

/// Result of one filing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Where the card was written.
    pub path: PathBuf,
    pub stage: StageName,
    /// The card left Memorizing or Remembered.
    pub was_moved: bool,
    /// Source file that could not be removed during a move; both copies exist.
    pub stale_source: Option<PathBuf>,
    /// The existing card could not be read and was replaced by an empty shell.
    pub parse_failed: bool,
}

/// Stage-aware card filing for one vault.
#[derive(Debug, Clone)]
pub struct WordcardManager {
    config: Config,
    registry: StageRegistry,
}

impl WordcardManager {
    /// Fails with [`VaultError::Configuration`] if the vault is not usable.
    pub fn new(config: Config) -> Result<Self, VaultError> {
        let registry = StageRegistry::from_config(&config)?;
        Ok(Self { config, registry })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &StageRegistry {
        &self.registry
    }

    /// Locate the existing card for `key`.
    pub fn find(&self, key: &str) -> Result<Option<LocatedCard>, VaultError> {
        vault_fs::find(&self.registry, key)
    }

    /// File `incoming` and `article_text` under `key`.
    pub fn process(
        &self,
        key: &str,
        incoming: &IncomingRecord,
        article_text: &str,
    ) -> Result<ProcessOutcome, VaultError> {
        let _lock = if self.config.file_management.lock_keys {
            Some(KeyLock::acquire(self.registry.root(), key)?)
        } else {
            None
        };

        if !self.config.file_management.check_existing {
            return self.write_direct(key, incoming);
        }

        match self.find(key)? {
            Some(located) => self.update_existing(key, located, incoming, article_text),
            None => self.create_new(key, incoming, article_text),
        }
    }

    /// File management disabled: write the record to New as is.
    fn write_direct(&self, key: &str, incoming: &IncomingRecord) -> Result<ProcessOutcome, VaultError> {
        let entry = VocabEntry::from_record(key, incoming);
        let path = self.registry.card_path(StageName::New, key);
        vault_fs::save(&entry, &path, &self.config.output)?;

        Ok(ProcessOutcome {
            path,
            stage: StageName::New,
            was_moved: false,
            stale_source: None,
            parse_failed: false,
        })
    }

    fn update_existing(
        &self,
        key: &str,
        located: LocatedCard,
        incoming: &IncomingRecord,
        article_text: &str,
    ) -> Result<ProcessOutcome, VaultError> {
        let parsed = parse_file(&located.path);
        let parse_failed = parsed.error.is_some();
        let mut entry = parsed.entry;
        entry.key = key.to_string();

        if self.config.file_management.append_articles {
            merge_article(&mut entry, article_text);
        }
        merge_entries(&mut entry, incoming);
        self.finish_entry(&mut entry);

        let transition = resolve(key, Some(located.stage));
        let target = self.registry.card_path(transition.target, key);

        let mut stale_source = None;
        if target != located.path {
            stale_source = remove_source(&located.path);
        }

        vault_fs::save(&entry, &target, &self.config.output)?;

        Ok(ProcessOutcome {
            path: target,
            stage: transition.target,
            was_moved: transition.was_moved,
            stale_source,
            parse_failed,
        })
    }

    fn create_new(
        &self,
        key: &str,
        incoming: &IncomingRecord,
        article_text: &str,
    ) -> Result<ProcessOutcome, VaultError> {
        let mut entry = VocabEntry::from_record(key, incoming);
        if self.config.file_management.append_articles && !article_text.trim().is_empty() {
            merge_article(&mut entry, article_text);
        }
        self.finish_entry(&mut entry);

        let transition = resolve(key, None);
        let target = self.registry.card_path(transition.target, key);
        vault_fs::save(&entry, &target, &self.config.output)?;

        Ok(ProcessOutcome {
            path: target,
            stage: transition.target,
            was_moved: transition.was_moved,
            stale_source: None,
            parse_failed: false,
        })
    }

    fn finish_entry(&self, entry: &mut VocabEntry) {
        if self.config.file_management.harvest_article_tags {
            let added = harvest_article_tags(entry);
            if !added.is_empty() {
                tracing::info!(key = %entry.key, tags = ?added, "lifted article tags");
            }
        }
    }
}

/// Delete the card being moved. Returns the path if it is still there.
fn remove_source(path: &Path) -> Option<PathBuf> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "removed old wordcard");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not remove old wordcard");
            Some(path.to_path_buf())
        }
    }
}
