//! Score command handler: game totals for both players.
//!
//! # Example Output
//!
//! ```text
//! Player 1: 42 (10 + 20 + 12)
//! Player 2: -5 (0 + -25 + 20)
//! ```
//!
//! With `--json`:
//!
//! ```json
//! {
//!   "player1": { "total": 42, "rounds": [10, 20, 12] },
//!   "player2": { "total": -5, "rounds": [0, -25, 20] }
//! }
//! ```

use std::io::Write;
use std::path::Path;

use lostcities_engine::game::{GameState, Player};
use lostcities_engine::scoring::{round_scores, score_game};

use crate::error::CliError;
use crate::formatters::format_game_summary;
use crate::store;

fn player_json(game: &GameState, player: Player) -> serde_json::Value {
    serde_json::json!({
        "total": score_game(game, player),
        "rounds": round_scores(game, player),
    })
}

pub fn handle_score_command(
    state_path: &Path,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let game = store::load_game(state_path);
    if json {
        let display = serde_json::json!({
            "player1": player_json(&game, Player::One),
            "player2": player_json(&game, Player::Two),
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        writeln!(out, "{}", format_game_summary(&game))?;
    }
    Ok(())
}
