use anyhow::Result;
use std::io;
use std::str::FromStr;

use wordcard::commands::{configure, file, find, list, resolve_config_path, show, status};
use wordcard::completions::write_completions;
use wordcard::models::StageName;

use super::types::{Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        write_completions(&mut cmd, *shell, &mut io::stdout());
        return Ok(());
    }

    let config_path = resolve_config_path(cli.config.as_deref())?;

    match cli.command {
        Commands::File {
            key,
            record,
            article,
        } => file::execute(&config_path, key, record.as_deref(), article),
        Commands::Find { key } => find::execute(&config_path, key),
        Commands::Show { key } => show::execute(&config_path, key),
        Commands::List { stage } => {
            let stage = stage.as_deref().map(StageName::from_str).transpose()?;
            list::execute(&config_path, stage)
        }
        Commands::Status => status::execute(&config_path),
        Commands::Configure(args) => configure::execute(&config_path, args.into()),
        Commands::Completions { .. } => Ok(()),
    }
}
