use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use wordcard::config::ConfigUpdate;

#[derive(Parser)]
#[command(name = "wordcard")]
#[command(about = "File vocabulary cards into an Obsidian vault", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Config file (default: <config dir>/wordcard/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log progress at info level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create or update the card for a word
    File {
        /// Word key (file name without extension)
        key: String,

        /// JSON record with tags, url and sections ("-" reads stdin)
        #[arg(short, long, value_name = "PATH")]
        record: Option<PathBuf>,

        /// Article text to append under "# Articles"
        #[arg(short, long)]
        article: Option<String>,
    },

    /// Print the path and stage of a card
    Find {
        /// Word key
        key: String,
    },

    /// Print the parsed contents of a card
    Show {
        /// Word key
        key: String,
    },

    /// List cards in every stage, or in one
    List {
        /// Stage to list (new, memorizing, remembered)
        #[arg(short, long)]
        stage: Option<String>,
    },

    /// Show configuration and vault status
    Status,

    /// Update the configuration file
    Configure(ConfigureArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ConfigureArgs {
    /// Vault root directory
    #[arg(long)]
    pub vault_path: Option<String>,

    /// Vault display name
    #[arg(long)]
    pub vault_name: Option<String>,

    /// Create stage directories on save
    #[arg(long, value_name = "BOOL")]
    pub create_directories: Option<bool>,

    /// Keep a .bak copy when overwriting a card
    #[arg(long, value_name = "BOOL")]
    pub backup_existing: Option<bool>,

    /// Look for an existing card before writing
    #[arg(long, value_name = "BOOL")]
    pub check_existing: Option<bool>,

    /// Append article text to existing cards
    #[arg(long, value_name = "BOOL")]
    pub append_articles: Option<bool>,

    /// Serialize concurrent runs on the same key
    #[arg(long, value_name = "BOOL")]
    pub lock_keys: Option<bool>,

    /// Copy hashtags from articles into the card tags
    #[arg(long, value_name = "BOOL")]
    pub harvest_article_tags: Option<bool>,
}

impl From<ConfigureArgs> for ConfigUpdate {
    fn from(args: ConfigureArgs) -> Self {
        ConfigUpdate {
            vault_path: args.vault_path,
            vault_name: args.vault_name,
            create_directories: args.create_directories,
            backup_existing: args.backup_existing,
            check_existing: args.check_existing,
            append_articles: args.append_articles,
            lock_keys: args.lock_keys,
            harvest_article_tags: args.harvest_article_tags,
        }
    }
}
