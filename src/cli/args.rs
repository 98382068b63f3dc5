//! CLI argument definitions using clap
//!
//! Commands:
//! - glossdb query --config <path>
//! - glossdb serve --config <path>
//! - glossdb list --config <path> [--render]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// glossdb - a case-insensitive, key-ordered in-memory record store
#[derive(Parser, Debug)]
#[command(name = "glossdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer a single JSON request from stdin and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./glossdb.json")]
        config: PathBuf,
    },

    /// Answer JSON requests from stdin, one per line, until EOF
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./glossdb.json")]
        config: PathBuf,
    },

    /// Print every record in key order
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./glossdb.json")]
        config: PathBuf,

        /// Print the three-line text rendering instead of JSON
        #[arg(long)]
        render: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_render() {
        let cli = Cli::try_parse_from(["glossdb", "list", "--config", "x.json", "--render"]).unwrap();
        match cli.command {
            Command::List { config, render } => {
                assert_eq!(config, PathBuf::from("x.json"));
                assert!(render);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["glossdb", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config } => assert_eq!(config, PathBuf::from("./glossdb.json")),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
