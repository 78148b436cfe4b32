//! Best-effort persistence of the game snapshot.
//!
//! Loading never fails: a missing, unreadable, or corrupt snapshot yields the
//! empty game. Saving never fails either: write errors are logged and the
//! in-memory game stays authoritative for the rest of the command.
//!
//! Fallbacks are logged at `info`, below the default `warn` filter, so they
//! only appear when `RUST_LOG` asks for them.

use std::path::Path;

use lostcities_engine::game::{GameState, reset_game};
use lostcities_engine::snapshot;
use tracing::{debug, info};

use crate::io_utils::{ensure_parent_dir, read_text_auto, write_text_auto};

pub fn load_game(path: &Path) -> GameState {
    if !path.exists() {
        debug!(path = %path.display(), "no snapshot yet, starting a new game");
        return reset_game();
    }
    let text = match read_text_auto(path) {
        Ok(text) => text,
        Err(e) => {
            info!(path = %path.display(), error = %e, "snapshot unreadable, starting a new game");
            return reset_game();
        }
    };
    match snapshot::decode(&text) {
        Ok(game) => {
            debug!(path = %path.display(), "snapshot loaded");
            game
        }
        Err(e) => {
            info!(path = %path.display(), error = %e, "snapshot corrupt, starting a new game");
            reset_game()
        }
    }
}

pub fn save_game(path: &Path, game: &GameState) {
    match try_save(path, game) {
        Ok(()) => debug!(path = %path.display(), "snapshot saved"),
        Err(e) => info!(path = %path.display(), error = %e, "snapshot not saved"),
    }
}

fn try_save(path: &Path, game: &GameState) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let text = snapshot::encode(game).map_err(|e| e.to_string())?;
    write_text_auto(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::capture::{CapturedEvent, capture};
    use lostcities_engine::cards::Suit;
    use lostcities_engine::game::{Player, Round, apply_to_round};
    use lostcities_engine::round::cycle_wager;
    use tracing::Level;

    fn sample() -> GameState {
        apply_to_round(&reset_game(), Player::Two, Round::Second, |r| {
            cycle_wager(r, Suit::White)
        })
    }

    #[test]
    fn missing_file_is_a_new_game() {
        let dir = tempfile::tempdir().unwrap();
        let (game, events) = capture(|| load_game(&dir.path().join("absent.json")));
        assert_eq!(game, reset_game());
        assert!(events.iter().all(|e| e.level != Level::WARN));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["nested/game.json", "game.json.zst"] {
            let path = dir.path().join(name);
            save_game(&path, &sample());
            assert_eq!(load_game(&path), sample(), "{name}");
        }
    }

    fn below_default_filter(events: &[CapturedEvent]) -> bool {
        events
            .iter()
            .all(|e| e.level != Level::WARN && e.level != Level::ERROR)
    }

    #[test]
    fn corrupt_file_falls_back_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        std::fs::write(&path, "{\"player1\": 7}").unwrap();
        let (game, events) = capture(|| load_game(&path));
        assert_eq!(game, reset_game());
        assert!(
            events
                .iter()
                .any(|e| e.level == Level::INFO && e.message.contains("corrupt"))
        );
        assert!(below_default_filter(&events));
    }

    #[test]
    fn non_canonical_keys_fall_back_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let text = r#"{"player1":[{"expeditions":{"RED-5":true}},{},{}],"player2":[{},{},{}]}"#;
        std::fs::write(&path, text).unwrap();
        let (game, events) = capture(|| load_game(&path));
        assert_eq!(game, reset_game());
        assert!(below_default_filter(&events));
    }

    #[test]
    fn unwritable_path_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be
        let path = dir.path().join("taken");
        std::fs::create_dir(&path).unwrap();
        let ((), events) = capture(|| save_game(&path, &sample()));
        assert!(
            events
                .iter()
                .any(|e| e.level == Level::INFO && e.message.contains("not saved"))
        );
        assert!(below_default_filter(&events));
    }
}
