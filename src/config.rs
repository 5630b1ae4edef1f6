//! Typed configuration for the vault and filing behavior.
//!
//! Stored as TOML, by default in `<config dir>/wordcard/config.toml`. Every
//! field has a default, so a partial or missing file still yields a complete
//! [`Config`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::StageName;

const CONFIG_DIR_NAME: &str = "wordcard";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vault: VaultConfig,
    pub output: OutputConfig,
    pub file_management: FileManagementConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Vault root; `~/` is expanded. Unset means no vault.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Display name; falls back to the last component of `path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub learning_stages: LearningStages,
}

/// Directory name of each stage, relative to the vault root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningStages {
    pub new: String,
    pub memorizing: String,
    pub remembered: String,
}

impl Default for LearningStages {
    fn default() -> Self {
        Self {
            new: "New".to_string(),
            memorizing: "Memorizing".to_string(),
            remembered: "Remembered".to_string(),
        }
    }
}

impl LearningStages {
    pub fn dir_name(&self, stage: StageName) -> &str {
        match stage {
            StageName::New => &self.new,
            StageName::Memorizing => &self.memorizing,
            StageName::Remembered => &self.remembered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Create missing stage directories before writing.
    pub create_directories: bool,
    /// Rename an existing card to `<name>.md.bak` before overwriting it.
    pub backup_existing: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            create_directories: true,
            backup_existing: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileManagementConfig {
    /// Look for an existing card and merge into it. When off, incoming
    /// records are written straight to the New stage.
    pub check_existing: bool,
    /// Merge article text and legacy notes into the articles section.
    pub append_articles: bool,
    /// Hold an advisory lock per key for the whole filing operation.
    pub lock_keys: bool,
    /// Lift hashtags found in article lines onto the tag line.
    pub harvest_article_tags: bool,
}

impl Default for FileManagementConfig {
    fn default() -> Self {
        Self {
            check_existing: true,
            append_articles: true,
            lock_keys: false,
            harvest_article_tags: false,
        }
    }
}

/// Partial settings applied on top of an existing [`Config`].
///
/// `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub vault_path: Option<String>,
    pub vault_name: Option<String>,
    pub create_directories: Option<bool>,
    pub backup_existing: Option<bool>,
    pub check_existing: Option<bool>,
    pub append_articles: Option<bool>,
    pub lock_keys: Option<bool>,
    pub harvest_article_tags: Option<bool>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.vault_path.is_none()
            && self.vault_name.is_none()
            && self.create_directories.is_none()
            && self.backup_existing.is_none()
            && self.check_existing.is_none()
            && self.append_articles.is_none()
            && self.lock_keys.is_none()
            && self.harvest_article_tags.is_none()
    }
}

impl Config {
    /// Merge an update into this config; set values override current ones.
    pub fn merge(&self, update: &ConfigUpdate) -> Config {
        let fm = &self.file_management;
        Config {
            vault: VaultConfig {
                path: update.vault_path.clone().or_else(|| self.vault.path.clone()),
                name: update.vault_name.clone().or_else(|| self.vault.name.clone()),
                learning_stages: self.vault.learning_stages.clone(),
            },
            output: OutputConfig {
                create_directories: update
                    .create_directories
                    .unwrap_or(self.output.create_directories),
                backup_existing: update
                    .backup_existing
                    .unwrap_or(self.output.backup_existing),
            },
            file_management: FileManagementConfig {
                check_existing: update.check_existing.unwrap_or(fm.check_existing),
                append_articles: update.append_articles.unwrap_or(fm.append_articles),
                lock_keys: update.lock_keys.unwrap_or(fm.lock_keys),
                harvest_article_tags: update
                    .harvest_article_tags
                    .unwrap_or(fm.harvest_article_tags),
            },
        }
    }

    /// Vault root with `~/` expanded, if configured.
    pub fn vault_path(&self) -> Option<PathBuf> {
        self.vault
            .path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| PathBuf::from(expand_tilde(p)))
    }

    /// Configured vault name, or the final component of the vault path.
    pub fn vault_name(&self) -> Option<String> {
        if let Some(name) = self.vault.name.as_deref().filter(|n| !n.is_empty()) {
            return Some(name.to_string());
        }
        self.vault_path()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
    }

    /// Vault path is set and points at an existing directory.
    pub fn is_vault_configured(&self) -> bool {
        self.vault_path().is_some_and(|p| p.is_dir())
    }
}

/// Default config file location.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the config at `path`; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Write `config` to `path`, creating parent directories.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    let content = toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(())
}

/// Load, merge `update`, save, and return the resulting config.
pub fn update_config(path: &Path, update: &ConfigUpdate) -> Result<Config> {
    let merged = load_config(path)?.merge(update);
    save_config(path, &merged)?;
    Ok(merged)
}

fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        if let Ok(home) = env::var("HOME") {
            return path.replacen('~', &home, 1);
        }
    }
    path.to_string()
}
