//! Command-line shim and entry point.
//!
//! A thin consumer of the photofinder library: it loads a configuration, opens a
//! session on the configured catalog and prints the current results.
//!
//! # Usage
//!
//! ```text
//! photofinder [CONFIG.toml] [key=value ...]
//! ```
//!
//! `key=value` pairs override the file (or the defaults when no file is given),
//! using the keys documented on `Config::with_overrides`.
//!
//! # Output
//!
//! - stdout: one JSON object per matching record, in result order
//! - stderr: logs, plus a summary line with result count and facets

use photofinder::observability::init_tracing;
use photofinder::{initialize, Config, PhotofinderError};
use std::collections::BTreeMap;
use std::io::Write;
use std::process::ExitCode;

const USAGE: &str = "usage: photofinder [CONFIG.toml] [key=value ...]";

fn parse_args(args: impl Iterator<Item = String>) -> photofinder::Result<Config> {
    let mut config_path = None;
    let mut overrides = BTreeMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once('=') {
            overrides.insert(key.trim().to_string(), value.to_string());
        } else if config_path.is_none() {
            config_path = Some(arg);
        } else {
            return Err(PhotofinderError::Config(format!(
                "unexpected argument `{arg}`\n{USAGE}"
            )));
        }
    }

    let base = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    Ok(base.with_overrides(&overrides))
}

fn run(config: &Config) -> photofinder::Result<()> {
    let session = initialize(config)?;
    let results = session.current_results();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in &results {
        let line = serde_json::to_string(record)
            .map_err(|e| PhotofinderError::Catalog(format!("failed to encode record: {e}")))?;
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    tracing::info!(
        results = results.len(),
        catalog = session.catalog().len(),
        tags = ?session.facet_tags(),
        cities = ?session.facet_cities(),
        "query complete"
    );

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config = match parse_args(args.into_iter()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("photofinder: {e}");
            return ExitCode::from(2);
        }
    };

    init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "photofinder failed");
            ExitCode::FAILURE
        }
    }
}
