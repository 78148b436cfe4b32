use serde::{Deserialize, Serialize};

use crate::round::RoundState;
use crate::snapshot::GameSnapshot;

/// Number of rounds in a game.
pub const ROUNDS_PER_GAME: usize = 3;
/// Number of players at the table.
pub const PLAYERS: usize = 2;

/// One of the two seats at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// 1-based seat number as shown to users.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// One of the three rounds of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Round {
    First,
    Second,
    Third,
}

impl Round {
    /// 1-based round number as shown to users.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_number(n: u8) -> Option<Round> {
        match n {
            1 => Some(Round::First),
            2 => Some(Round::Second),
            3 => Some(Round::Third),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Round::First => 0,
            Round::Second => 1,
            Round::Third => 2,
        }
    }
}

pub fn all_players() -> [Player; PLAYERS] {
    [Player::One, Player::Two]
}

pub fn all_rounds() -> [Round; ROUNDS_PER_GAME] {
    [Round::First, Round::Second, Round::Third]
}

/// Recorded play for a whole game: three rounds for each of the two players.
/// This is the value persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot", into = "GameSnapshot")]
pub struct GameState {
    /// Indexed by `Player::index()`, then `Round::index()`
    rounds: [[RoundState; ROUNDS_PER_GAME]; PLAYERS],
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_rounds(rounds: [[RoundState; ROUNDS_PER_GAME]; PLAYERS]) -> Self {
        Self { rounds }
    }

    pub fn round(&self, player: Player, round: Round) -> &RoundState {
        &self.rounds[player.index()][round.index()]
    }

    pub fn rounds(&self, player: Player) -> &[RoundState; ROUNDS_PER_GAME] {
        &self.rounds[player.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.iter().flatten().all(RoundState::is_empty)
    }
}

/// Returns a copy of `game` in which only the `(player, round)` state is
/// replaced by `f` applied to its previous value.
///
/// # Examples
///
/// ```
/// use lostcities_engine::cards::Suit;
/// use lostcities_engine::game::{apply_to_round, reset_game, Player, Round};
/// use lostcities_engine::round::cycle_wager;
///
/// let game = reset_game();
/// let next = apply_to_round(&game, Player::Two, Round::Third, |r| cycle_wager(r, Suit::Red));
/// assert_eq!(next.round(Player::Two, Round::Third).wager(Suit::Red).multiplier(), 2);
/// assert_eq!(next.round(Player::One, Round::Third), game.round(Player::One, Round::Third));
/// ```
pub fn apply_to_round<F>(game: &GameState, player: Player, round: Round, f: F) -> GameState
where
    F: FnOnce(&RoundState) -> RoundState,
{
    let mut next = game.clone();
    next.rounds[player.index()][round.index()] = f(game.round(player, round));
    next
}

/// The canonical empty game: no cards and no wagers in any round.
pub fn reset_game() -> GameState {
    GameState::new()
}
