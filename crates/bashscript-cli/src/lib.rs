//! bashscript-cli - REPL and command line tools for BashScript
//!
//! The binary lives in `main.rs`; the pieces it drives are here so they can
//! be run against in-memory readers and writers.

pub mod lex;
pub mod repl;

pub use lex::{lex_file, LexReport};

use tracing::Level;

/// Log level for the `-v`/`-q` flags
pub fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initializes logging to stderr, once per process
pub fn init_logging(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}
