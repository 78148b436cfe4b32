//! Wager command handler: cycles one suit's wager multiplier.

use std::io::Write;
use std::path::Path;

use lostcities_engine::cards::Suit;
use lostcities_engine::game::apply_to_round;
use lostcities_engine::round::cycle_wager;
use lostcities_engine::scoring::{score_round, suit_breakdown};

use super::Selection;
use crate::error::CliError;
use crate::formatters::format_suit_row;
use crate::store;

pub fn handle_wager_command(
    state_path: &Path,
    selection: Selection,
    suit: Suit,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let game = store::load_game(state_path);
    let game = apply_to_round(&game, selection.player, selection.round, |r| {
        cycle_wager(r, suit)
    });
    store::save_game(state_path, &game);

    let round = game.round(selection.player, selection.round);
    writeln!(
        out,
        "{}: {} wager {}",
        selection.label(),
        suit,
        round.wager(suit)
    )?;
    writeln!(out, "{}", format_suit_row(round, &suit_breakdown(round, suit)))?;
    writeln!(out, "Round total: {}", score_round(round))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::selection;
    use lostcities_engine::game::{Player, Round};

    #[test]
    fn wager_cycles_across_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let sel = selection(Player::Two, Round::First);

        let mut seen = Vec::new();
        for _ in 0..4 {
            let mut out = Vec::new();
            handle_wager_command(&path, sel, Suit::Green, &mut out).unwrap();
            let first = String::from_utf8(out).unwrap().lines().next().unwrap().to_string();
            seen.push(first);
        }
        assert_eq!(seen[0], "Player 2 - Round 1: green wager x2");
        assert_eq!(seen[1], "Player 2 - Round 1: green wager x3");
        assert_eq!(seen[2], "Player 2 - Round 1: green wager x4");
        assert_eq!(seen[3], "Player 2 - Round 1: green wager x1");
        assert!(store::load_game(&path).is_empty());
    }

    #[test]
    fn lone_wager_reports_penalty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let mut out = Vec::new();
        handle_wager_command(&path, selection(Player::One, Round::Third), Suit::Red, &mut out)
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Round total: -40"));
    }
}
