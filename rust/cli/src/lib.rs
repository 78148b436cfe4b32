//! # Lost Cities CLI Library
//!
//! Terminal front end for the `lostcities-engine` scorekeeper. Each invocation
//! loads the saved game, applies at most one change, saves it again, and prints
//! the affected scores.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["lostcities", "toggle", "--card", "red-7", "--player", "2"];
//! let code = lostcities_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `show`: Print one round suit by suit (cards, wager, roi, bonus, score), optionally as JSON
//! - `score`: Print both players' totals with per-round scores
//! - `toggle`: Mark or unmark an expedition card
//! - `wager`: Cycle a suit's wager multiplier
//! - `reset`: Start a new game
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod store;
pub mod ui;

use cli::{Commands, LostCitiesCli};
use commands::{
    Selection, handle_cfg_command, handle_reset_command, handle_score_command,
    handle_show_command, handle_toggle_command, handle_wager_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```no_run
/// use std::io;
/// let args = vec!["lostcities", "score"];
/// let code = lostcities_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["show", "score", "toggle", "wager", "reset", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match LostCitiesCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Lost Cities score calculator");
            write_or_exit!(err, "Usage: lostcities <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: lostcities --help");
            return exit_code::ERROR;
        }
    };

    if let Commands::Cfg = cli.cmd {
        return match handle_cfg_command(out, err) {
            Ok(()) => exit_code::SUCCESS,
            // already reported by the handler
            Err(_) => exit_code::ERROR,
        };
    }

    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            write_or_exit!(err, "Error: Invalid configuration: {}", e);
            return exit_code::ERROR;
        }
    };
    let state_path = PathBuf::from(cli.state.unwrap_or_else(|| cfg.state_path.clone()));

    let result = match cli.cmd {
        Commands::Show { json, selection } => Selection::resolve(selection, &cfg)
            .and_then(|sel| handle_show_command(&state_path, sel, json, out)),
        Commands::Score { json } => handle_score_command(&state_path, json, out),
        Commands::Toggle { card, selection } => Selection::resolve(selection, &cfg)
            .and_then(|sel| handle_toggle_command(&state_path, sel, card, out)),
        Commands::Wager { suit, selection } => Selection::resolve(selection, &cfg)
            .and_then(|sel| handle_wager_command(&state_path, sel, suit, out)),
        Commands::Reset { yes } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_reset_command(&state_path, yes, out, &mut stdin_lock)
        }
        Commands::Cfg => unreachable!("handled above"),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => report_failure!(err, e),
    }
}
