//! Toggle command handler: marks one expedition card as played or not.

use std::io::Write;
use std::path::Path;

use lostcities_engine::cards::ExpeditionCard;
use lostcities_engine::game::apply_to_round;
use lostcities_engine::round::toggle_expedition_card;
use lostcities_engine::scoring::{score_round, suit_breakdown};

use super::Selection;
use crate::error::CliError;
use crate::formatters::format_suit_row;
use crate::store;

/// Flip `card` in the selected round, save, and print the updated suit.
///
/// # Errors
///
/// Returns `CliError::Io` if writing to the output stream fails. A failed
/// snapshot save is logged, not returned.
pub fn handle_toggle_command(
    state_path: &Path,
    selection: Selection,
    card: ExpeditionCard,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let game = store::load_game(state_path);
    let game = apply_to_round(&game, selection.player, selection.round, |r| {
        toggle_expedition_card(r, card)
    });
    store::save_game(state_path, &game);

    let round = game.round(selection.player, selection.round);
    let status = if round.is_played(card) {
        "played"
    } else {
        "removed"
    };
    writeln!(out, "{}: {} {}", selection.label(), card, status)?;
    writeln!(
        out,
        "{}",
        format_suit_row(round, &suit_breakdown(round, card.suit))
    )?;
    writeln!(out, "Round total: {}", score_round(round))?;
    Ok(())
}
