//! CLI module for glossdb
//!
//! Provides command-line interface for:
//! - query: answer one JSON request from stdin
//! - serve: answer JSON requests from stdin until EOF
//! - list: print every record in key order

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod request;
mod seed;

pub use args::{Cli, Command};
pub use commands::{
    boot, boot_with, handle_line, list, query, run, run_command, serve, serve_lines, write_listing,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_response};
pub use request::{execute, Request};
pub use seed::{apply_seed, load_records, SeedError, SeedReport};
