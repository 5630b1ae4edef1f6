//! Stage name to directory resolution.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::VaultError;
use crate::models::{card_filename, StageName};

/// Concrete directories for the three stages of one vault.
#[derive(Debug, Clone)]
pub struct StageRegistry {
    root: PathBuf,
    new: PathBuf,
    memorizing: PathBuf,
    remembered: PathBuf,
}

impl StageRegistry {
    /// Build the registry from config.
    ///
    /// Fails with [`VaultError::Configuration`] when the vault path is unset
    /// or does not point at an existing directory. Stage directories
    /// themselves may be missing.
    pub fn from_config(config: &Config) -> Result<Self, VaultError> {
        let root = config.vault_path().ok_or_else(|| {
            VaultError::Configuration("vault path is not set".to_string())
        })?;

        if !root.is_dir() {
            return Err(VaultError::Configuration(format!(
                "vault path is not an accessible directory: {}",
                root.display()
            )));
        }

        Ok(Self::new(root, &config.vault.learning_stages))
    }

    /// Registry rooted at `root` without checking the filesystem.
    pub fn new(root: impl Into<PathBuf>, stages: &crate::config::LearningStages) -> Self {
        let root = root.into();
        Self {
            new: root.join(stages.dir_name(StageName::New)),
            memorizing: root.join(stages.dir_name(StageName::Memorizing)),
            remembered: root.join(stages.dir_name(StageName::Remembered)),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir(&self, stage: StageName) -> &Path {
        match stage {
            StageName::New => &self.new,
            StageName::Memorizing => &self.memorizing,
            StageName::Remembered => &self.remembered,
        }
    }

    /// Path a card for `key` has inside `stage`.
    pub fn card_path(&self, stage: StageName, key: &str) -> PathBuf {
        self.dir(stage).join(card_filename(key))
    }
}
