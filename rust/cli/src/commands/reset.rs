//! Reset command handler: replaces the saved game with an empty one.

use std::io::{BufRead, Write};
use std::path::Path;

use lostcities_engine::game::reset_game;

use crate::error::CliError;
use crate::store;
use crate::ui;

/// Clear both players' rounds after confirmation (skipped with `--yes`).
///
/// Declining is not an error: the snapshot is left untouched and the command
/// still succeeds.
pub fn handle_reset_command(
    state_path: &Path,
    yes: bool,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if !yes && !ui::confirm(out, stdin, "Reset all scores?")? {
        writeln!(out, "Reset cancelled.")?;
        return Ok(());
    }
    store::save_game(state_path, &reset_game());
    writeln!(out, "Game reset.")?;
    Ok(())
}
