//! CLI command handlers.
//!
//! Commands:
//! - `wordcard file <key> [--record <json>] [--article <text>]` - File a card
//! - `wordcard find <key>` - Show where a card lives
//! - `wordcard show <key>` - Print a card's parsed structure
//! - `wordcard list [--stage <stage>]` - List cards per stage
//! - `wordcard status` - Show configuration and vault status
//! - `wordcard configure ...` - Update configuration

pub mod configure;
pub mod file;
pub mod find;
pub mod list;
pub mod show;
pub mod status;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{default_config_path, load_config, Config};
use crate::manager::WordcardManager;

/// Config file to use: the explicit path or the default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Load config and open the vault it points at.
pub fn open_manager(config_path: &Path) -> Result<WordcardManager> {
    let config: Config = load_config(config_path)?;
    WordcardManager::new(config).with_context(|| {
        format!(
            "Vault not usable; run 'wordcard configure --vault-path <dir>' (config: {})",
            config_path.display()
        )
    })
}
