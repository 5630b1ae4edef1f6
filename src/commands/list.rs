use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::open_manager;
use crate::fs::{inventory, list_stage};
use crate::models::StageName;

fn print_stage(stage: StageName, dir: &Path, cards: &[PathBuf]) {
    println!(
        "{} {} ({})",
        stage.to_string().bold(),
        dir.display().to_string().dimmed(),
        cards.len()
    );
    for card in cards {
        if let Some(stem) = card.file_stem() {
            println!("  {}", stem.to_string_lossy());
        }
    }
}

pub fn execute(config_path: &Path, stage: Option<StageName>) -> Result<()> {
    let manager = open_manager(config_path)?;
    let registry = manager.registry();

    match stage {
        Some(stage) => {
            let cards = list_stage(registry, stage)?;
            print_stage(stage, registry.dir(stage), &cards);
        }
        None => {
            for (stage, cards) in inventory(registry)? {
                print_stage(stage, registry.dir(stage), &cards);
            }
        }
    }

    Ok(())
}
