//! Round table and score summary formatters for terminal display.
//!
//! Pure functions that render engine values as text. Unplayed card slots use a
//! middle dot with an ASCII `.` fallback for terminals that cannot render it.
//!
//! ## Example
//!
//! ```rust
//! use lostcities_engine::game::{reset_game, Player};
//! use lostcities_cli::formatters::format_player_summary;
//!
//! let line = format_player_summary(&reset_game(), Player::One);
//! assert_eq!(line, "Player 1: 0 (0 + 0 + 0)");
//! ```

use lostcities_engine::cards::{Suit, all_ranks};
use lostcities_engine::game::{GameState, Player, Round, all_players};
use lostcities_engine::round::RoundState;
use lostcities_engine::scoring::{SuitScore, round_breakdown, round_scores, score_game, score_round};

/// Check if the terminal supports Unicode symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

fn empty_slot() -> &'static str {
    if supports_unicode() { "·" } else { "." }
}

/// One fixed-width slot per rank, showing the rank if played.
pub fn format_ranks(state: &RoundState, suit: Suit) -> String {
    let played: Vec<_> = state.ranks_in(suit).collect();
    all_ranks()
        .iter()
        .map(|rank| {
            if played.contains(rank) {
                format!("{:>3}", rank.to_string())
            } else {
                format!("{:>3}", empty_slot())
            }
        })
        .collect()
}

/// Table row for one suit: cards, wager, roi, bonus, score.
pub fn format_suit_row(state: &RoundState, s: &SuitScore) -> String {
    format!(
        "{:<7}{}  {:>5}{:>6}{:>7}{:>7}",
        s.suit.as_str(),
        format_ranks(state, s.suit),
        s.wager.to_string(),
        s.roi,
        format!("+{}", s.bonus),
        s.score
    )
}

pub fn format_round_table(game: &GameState, player: Player, round: Round) -> String {
    let state = game.round(player, round);
    let mut lines = vec![
        format!("Player {} - Round {}", player.number(), round.number()),
        format!(
            "{:<7}{:<27}  {:>5}{:>6}{:>7}{:>7}",
            "suit", "cards", "wager", "roi", "bonus", "score"
        ),
    ];
    for s in round_breakdown(state) {
        lines.push(format_suit_row(state, &s));
    }
    lines.push(format!("Round total: {}", score_round(state)));
    lines.join("\n")
}

/// `Player N: total (r1 + r2 + r3)`
pub fn format_player_summary(game: &GameState, player: Player) -> String {
    let rounds = round_scores(game, player)
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" + ");
    format!(
        "Player {}: {} ({})",
        player.number(),
        score_game(game, player),
        rounds
    )
}

pub fn format_game_summary(game: &GameState) -> String {
    all_players()
        .iter()
        .map(|&p| format_player_summary(game, p))
        .collect::<Vec<_>>()
        .join("\n")
}
