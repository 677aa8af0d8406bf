use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// navmenu - navigation-menu grouping engine
#[derive(Parser, Debug)]
#[command(name = "navmenu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Group a menu file and render the result
    Show {
        /// Path to the menu file (.json, .yml or .yaml)
        file: PathBuf,

        /// Also list entries hidden by visibility rules
        #[arg(long)]
        all: bool,
    },

    /// Validate a menu file and report visibility findings
    Check {
        /// Path to the menu file (.json, .yml or .yaml)
        file: PathBuf,

        /// Fail on warnings (CI mode)
        #[arg(long)]
        strict: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["navmenu", "show", "menu.json"]).unwrap();
        match cli.command {
            Commands::Show { file, all } => {
                assert_eq!(file, PathBuf::from("menu.json"));
                assert!(!all);
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_check_strict_json() {
        let cli = Cli::try_parse_from(["navmenu", "--json", "check", "menu.yaml", "--strict"])
            .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Check { file, strict } => {
                assert_eq!(file, PathBuf::from("menu.yaml"));
                assert!(strict);
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn test_json_flag_is_global() {
        let cli = Cli::try_parse_from(["navmenu", "show", "menu.json", "--json"]).unwrap();
        assert!(cli.json);
    }
}
