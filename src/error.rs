//! Error types for the card filing core.
//!
//! Only configuration and save failures abort an operation. Parse failures
//! degrade to an empty card and are handed back next to it; a source file that
//! could not be removed during a stage move is reported on the outcome.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures surfaced by the locator, persister and manager.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("vault is not configured: {0}")]
    Configuration(String),

    #[error("failed to read stage directory {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to save wordcard to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to lock key '{key}': {source}")]
    Lock {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// Non-fatal failure while reading an existing card.
#[derive(Debug, Error)]
#[error("failed to parse wordcard {}: {source}", path.display())]
pub struct ParseError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
