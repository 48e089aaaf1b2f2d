//! BashScript command line

use bashscript_cli::{init_logging, lex_file, log_level, repl};
use bashscript_error::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error as _;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bashscript")]
#[command(version)]
#[command(about = "BashScript language tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Plain diagnostics, without ANSI colors
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Starts the interactive prompt (default)
    Repl,

    /// Shows file tokens (debug)
    Lex {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(log_level(cli.verbose, cli.quiet));

    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(!cli.no_color),
        Commands::Lex { input } => run_lex(input, !cli.no_color),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            if let Some(source) = e.source() {
                eprintln!("  caused by: {}", source);
            }
            std::process::exit(1);
        }
    }
}

fn run_repl(colors: bool) -> Result<bool> {
    let stdout = io::stdout();
    let colors = colors && stdout.is_terminal();

    print!("{}", repl::greeting(&repl::current_user()));
    repl::start(io::stdin().lock(), stdout.lock(), colors)?;
    Ok(true)
}

fn run_lex(input: PathBuf, colors: bool) -> Result<bool> {
    let stdout = io::stdout();
    let colors = colors && stdout.is_terminal();

    let report = lex_file(&input, stdout.lock(), colors)?;
    Ok(report.is_clean())
}
