pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod fs;
pub mod manager;
pub mod merge;
pub mod models;
pub mod parser;

pub use error::{ParseError, VaultError};
pub use manager::{ProcessOutcome, WordcardManager};
