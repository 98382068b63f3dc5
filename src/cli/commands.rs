//! CLI command implementations
//!
//! Every command boots the same way: load config, seed the store, verify
//! it, then serve. The store lives only for the duration of the process.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::OrderedStore;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};
use super::request::{execute, Request};
use super::seed::{apply_seed, load_records};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Query { config } => query(&config),
        Command::Serve { config } => serve(&config),
        Command::List { config, render } => list(&config, render),
    }
}

/// Build a store from the configuration file at `config_path`
pub fn boot(config_path: &Path) -> CliResult<OrderedStore> {
    let config = Config::load(config_path)?;
    let shown = config_path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("config", shown.as_str())]);

    boot_with(&config)
}

/// Build a store from an already loaded configuration
pub fn boot_with(config: &Config) -> CliResult<OrderedStore> {
    let mut store = OrderedStore::new();

    if let Some(seed_path) = config.seed_path() {
        let records = load_records(&seed_path)?;
        let report = apply_seed(&mut store, records, config.strict_seed)?;
        let ignored = report.ignored.len().to_string();
        let inserted = report.inserted.to_string();
        let seed_file = seed_path.display().to_string();
        log_event_with_fields(
            Event::SeedLoaded,
            &[
                ("ignored", ignored.as_str()),
                ("inserted", inserted.as_str()),
                ("seed_file", seed_file.as_str()),
            ],
        );
    }

    if config.verify_on_boot {
        if let Err(e) = store.validate() {
            log_event_with_fields(Event::InvariantCheckFailed, &[("reason", e.message())]);
            return Err(CliError::store_corrupt(e.to_string()));
        }
    }

    let height = store.height().to_string();
    let records = store.len().to_string();
    log_event_with_fields(
        Event::StoreReady,
        &[("height", height.as_str()), ("records", records.as_str())],
    );
    Ok(store)
}

/// Answer one request from stdin
pub fn query(config_path: &Path) -> CliResult<()> {
    let mut store = boot(config_path)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let line = read_request(&mut input)?
        .ok_or_else(|| CliError::io_error("Empty input"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    handle_line(&mut store, &line, &mut out)
}

/// Answer requests from stdin until EOF
pub fn serve(config_path: &Path) -> CliResult<()> {
    let mut store = boot(config_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve_lines(&mut store, stdin.lock(), &mut stdout.lock())?;

    log_event(Event::ShutdownComplete);
    Ok(())
}

/// Answer every non-blank line of `input`, writing one response per line.
///
/// A bad request produces an error response and serving continues. Only
/// I/O failures stop the loop.
pub fn serve_lines<R: BufRead, W: Write>(
    store: &mut OrderedStore,
    input: R,
    out: &mut W,
) -> CliResult<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        handle_line(store, &line, out)?;
    }
    Ok(())
}

/// Parse, execute and answer one request line
pub fn handle_line<W: Write>(store: &mut OrderedStore, line: &str, out: &mut W) -> CliResult<()> {
    let request = match Request::parse(line) {
        Ok(request) => request,
        Err(e) => {
            log_event_with_fields(Event::RequestRejected, &[("reason", e.message())]);
            return write_error(out, e.code_str(), e.message());
        }
    };

    let op = request.op();
    match execute(store, request) {
        Ok(data) => {
            log_event_with_fields(Event::RequestComplete, &[("op", op)]);
            write_response(out, data)
        }
        Err(e) => {
            log_event_with_fields(Event::RequestRejected, &[("op", op), ("reason", e.message())]);
            write_error(out, e.code().code(), e.message())
        }
    }
}

/// Print every record in key order
pub fn list(config_path: &Path, render: bool) -> CliResult<()> {
    let store = boot(config_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(&store, render, &mut out)
}

/// Write all records, either as a JSON array or as text blocks
pub fn write_listing<W: Write>(store: &OrderedStore, render: bool, out: &mut W) -> CliResult<()> {
    if render {
        for (i, record) in store.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", record)?;
        }
    } else {
        serde_json::to_writer(&mut *out, &store.all_records())?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
