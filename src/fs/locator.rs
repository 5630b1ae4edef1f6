//! Finding existing cards across stage directories.
//!
//! Stages are scanned in [`StageName::SEARCH_ORDER`]. Inside a stage an exact
//! `<normalized-key>.md` match is tried first, then a case-insensitive stem
//! match. The first hit wins; a key that exists in several stages resolves
//! to the earliest one.

use std::fs;
use std::path::{Path, PathBuf};

use super::registry::StageRegistry;
use crate::error::VaultError;
use crate::models::keys::markers::CARD_EXTENSION;
use crate::models::{normalize_key, StageName};

/// A card found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedCard {
    pub path: PathBuf,
    pub stage: StageName,
}

/// Search all stages for the card of `key`.
pub fn find(registry: &StageRegistry, key: &str) -> Result<Option<LocatedCard>, VaultError> {
    let stem = normalize_key(key);

    for stage in StageName::SEARCH_ORDER {
        if let Some(path) = find_in_dir(registry.dir(stage), &stem)? {
            tracing::info!(key, stage = %stage, path = %path.display(), "found existing wordcard");
            return Ok(Some(LocatedCard { path, stage }));
        }
    }

    tracing::info!(key, "no existing wordcard found");
    Ok(None)
}

fn find_in_dir(dir: &Path, stem: &str) -> Result<Option<PathBuf>, VaultError> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let exact = dir.join(format!("{stem}.{CARD_EXTENSION}"));
    if exact.is_file() {
        return Ok(Some(exact));
    }

    let wanted = stem.to_lowercase();
    for path in card_files(dir)? {
        let matches = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.to_lowercase() == wanted);
        if matches {
            tracing::debug!(path = %path.display(), "case-insensitive match");
            return Ok(Some(path));
        }
    }

    Ok(None)
}

/// Markdown files directly inside `dir`, sorted by file name.
fn card_files(dir: &Path) -> Result<Vec<PathBuf>, VaultError> {
    let scan_err = |source: std::io::Error| VaultError::Scan {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_err)? {
        let path = entry.map_err(scan_err)?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(CARD_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Cards currently filed in `stage`. A missing stage directory is empty.
pub fn list_stage(registry: &StageRegistry, stage: StageName) -> Result<Vec<PathBuf>, VaultError> {
    let dir = registry.dir(stage);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    card_files(dir)
}

/// Cards of every stage, in search order.
pub fn inventory(
    registry: &StageRegistry,
) -> Result<Vec<(StageName, Vec<PathBuf>)>, VaultError> {
    StageName::SEARCH_ORDER
        .iter()
        .map(|&stage| Ok((stage, list_stage(registry, stage)?)))
        .collect()
}
