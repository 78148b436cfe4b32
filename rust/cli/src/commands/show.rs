//! Show command handler: prints one round as a suit-by-suit table.
//!
//! With `--json` the same breakdown is printed as a document:
//!
//! ```json
//! {
//!   "player": 1,
//!   "round": 1,
//!   "suits": [
//!     { "suit": "yellow", "card_total": 0, "card_count": 0, "wager": 1, "roi": 0, "bonus": 0, "score": 0 },
//!     ...
//!   ],
//!   "total": 0
//! }
//! ```

use std::io::Write;
use std::path::Path;

use lostcities_engine::scoring::{round_breakdown, score_round};

use super::Selection;
use crate::error::CliError;
use crate::formatters::format_round_table;
use crate::store;

pub fn handle_show_command(
    state_path: &Path,
    selection: Selection,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let game = store::load_game(state_path);
    if json {
        let round = game.round(selection.player, selection.round);
        let display = serde_json::json!({
            "player": selection.player.number(),
            "round": selection.round.number(),
            "suits": round_breakdown(round),
            "total": score_round(round),
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        writeln!(
            out,
            "{}",
            format_round_table(&game, selection.player, selection.round)
        )?;
    }
    Ok(())
}
