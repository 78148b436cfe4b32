//! Command handler modules for the Lost Cities CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and the snapshot
//!   path are passed as parameters
//! - Error propagation: all errors propagated via `CliError`
//!
//! Commands that change the game load the snapshot, apply one engine
//! transition, and save the result before printing.

mod cfg;
mod reset;
mod score;
mod show;
mod toggle;
mod wager;

pub use cfg::handle_cfg_command;
pub use reset::handle_reset_command;
pub use score::handle_score_command;
pub use show::handle_show_command;
pub use toggle::handle_toggle_command;
pub use wager::handle_wager_command;

use crate::cli::SelectionArgs;
use crate::config::Config;
use crate::error::CliError;
use lostcities_engine::game::{Player, Round};

/// The player and round a command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub player: Player,
    pub round: Round,
}

impl Selection {
    /// Command-line values win; configuration fills in the rest.
    pub fn resolve(args: SelectionArgs, cfg: &Config) -> Result<Self, CliError> {
        let player = args.player.unwrap_or(cfg.player);
        let round = args.round.unwrap_or(cfg.round);
        Ok(Self {
            player: Player::from_number(player).ok_or_else(|| {
                CliError::InvalidInput(format!("player must be 1 or 2, got {}", player))
            })?,
            round: Round::from_number(round).ok_or_else(|| {
                CliError::InvalidInput(format!("round must be between 1 and 3, got {}", round))
            })?,
        })
    }

    pub fn label(&self) -> String {
        format!(
            "Player {} - Round {}",
            self.player.number(),
            self.round.number()
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_arguments_over_config() {
        let cfg = Config {
            player: 2,
            round: 3,
            ..Config::default()
        };
        let sel = Selection::resolve(
            SelectionArgs {
                player: Some(1),
                round: None,
            },
            &cfg,
        )
        .unwrap();
        assert_eq!(sel.player, Player::One);
        assert_eq!(sel.round, Round::Third);
        assert_eq!(sel.label(), "Player 1 - Round 3");
    }

    #[test]
    fn resolve_rejects_out_of_range_config() {
        let cfg = Config {
            round: 9,
            ..Config::default()
        };
        let result = Selection::resolve(SelectionArgs::default(), &cfg);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
