//! Times one hash over a file.
//!
//! ```text
//! hashbench <native|portable> <algorithm> <input-file>
//! ```
//!
//! Prints `hash: <elapsed>` on success. An unknown backend or algorithm
//! prints `unknown hash: <algorithm>` and exits with 1; an unreadable input
//! exits with 2.

use std::process::ExitCode;

use nodebuf::bench;
use nodebuf::config::BenchConfig;
use nodebuf::{BenchError, HashError};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match BenchConfig::from_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => return ExitCode::SUCCESS,
        Err(HashError::UnknownAlgorithm(_) | HashError::UnknownBackend(_)) => {
            // from_args only fails once all three arguments are present.
            println!("unknown hash: {}", args[1]);
            return ExitCode::from(1);
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    match bench::run(&config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(BenchError::Io(err)) => {
            eprintln!("cannot read {}: {err}", config.input().display());
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}
