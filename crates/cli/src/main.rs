//! Character sheet tool.
//!
//! Reads catalogs and character files from a data directory and runs the
//! sheet rules against them. Run with: `rigsheet <command>`

mod commands;
mod config;
mod dirs;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{
    Abilities, CheckEquip, Classes, Consume, Context, Equip, Stats, Unequip, UseAbility,
};
use config::CliConfig;
use rigsheet_content::ContentFactory;

/// Character sheet rules: derived stats, equipment limits, consumables
#[derive(Parser)]
#[command(name = "rigsheet")]
#[command(about = "Character sheet rules for the table", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory (defaults to $RIGSHEET_DATA_DIR, ./data, then the platform data dir)
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log rule decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show derived stats, skills and inventory
    Stats(Stats),

    /// List abilities from every source
    Abilities(Abilities),

    /// Check whether an entry could be equipped
    CheckEquip(CheckEquip),

    /// Equip an inventory entry
    Equip(Equip),

    /// Unequip an inventory entry
    Unequip(Unequip),

    /// Consume one unit of an inventory entry
    Consume(Consume),

    /// Spend an ability charge, or restore all charges with --rest
    Use(UseAbility),

    /// List the class catalog
    Classes(Classes),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RIGSHEET_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let cli = Cli::parse();

    let _guard = logging::setup_logging(config.log_dir.as_deref(), cli.verbose)?;

    let data_dir = dirs::resolve_data_dir(cli.data_dir, config.data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let ctx = Context {
        factory: ContentFactory::new(data_dir),
        json: cli.json || config.json,
    };

    match cli.command {
        Command::Stats(cmd) => cmd.execute(&ctx),
        Command::Abilities(cmd) => cmd.execute(&ctx),
        Command::CheckEquip(cmd) => cmd.execute(&ctx),
        Command::Equip(cmd) => cmd.execute(&ctx),
        Command::Unequip(cmd) => cmd.execute(&ctx),
        Command::Consume(cmd) => cmd.execute(&ctx),
        Command::Use(cmd) => cmd.execute(&ctx),
        Command::Classes(cmd) => cmd.execute(&ctx),
    }
}
