//! navmenu CLI - navigation-menu grouping engine
//!
//! Usage: navmenu <COMMAND>
//!
//! Commands:
//!   show    Group a menu file and render the result
//!   check   Validate a menu file and report visibility findings

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { file, all } => commands::show::cmd_show(&file, all, cli.json),
        Commands::Check { file, strict } => commands::check::cmd_check(&file, strict, cli.json),
    }
}
