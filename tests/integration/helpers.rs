//! Shared fixtures for vault integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use wordcard::config::Config;
use wordcard::models::{IncomingRecord, StageName, WordSection};
use wordcard::WordcardManager;

/// Temporary vault with its config pointing at it.
pub struct TestVault {
    pub dir: TempDir,
    pub config: Config,
}

impl TestVault {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let mut config = Config::default();
        config.vault.path = Some(dir.path().display().to_string());
        Self { dir, config }
    }

    pub fn manager(&self) -> WordcardManager {
        WordcardManager::new(self.config.clone()).expect("Failed to open vault")
    }

    pub fn stage_path(&self, stage: StageName, file_name: &str) -> PathBuf {
        self.dir
            .path()
            .join(self.config.vault.learning_stages.dir_name(stage))
            .join(file_name)
    }

    /// Write a card by hand into a stage directory.
    pub fn seed(&self, stage: StageName, file_name: &str, content: &str) -> PathBuf {
        let path = self.stage_path(stage, file_name);
        fs::create_dir_all(path.parent().expect("stage path has a parent"))
            .expect("Failed to create stage directory");
        fs::write(&path, content).expect("Failed to seed card");
        path
    }

    pub fn read(&self, stage: StageName, file_name: &str) -> String {
        fs::read_to_string(self.stage_path(stage, file_name)).expect("Failed to read card")
    }
}

pub fn kala_record() -> IncomingRecord {
    IncomingRecord {
        tags: vec!["noun".to_string()],
        url: "https://en.wiktionary.org/wiki/kala".to_string(),
        sections: vec![WordSection::new("noun", vec!["1. fish".to_string()])],
    }
}
