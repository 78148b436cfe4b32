//! Persisted form of a [`GameState`].
//!
//! The snapshot is a JSON document with one entry per player, each holding
//! three rounds:
//!
//! ```json
//! {
//!   "player1": [
//!     { "expeditions": { "red-2": true, "red-5": true }, "wagers": { "red": 2 } },
//!     { "expeditions": {}, "wagers": {} },
//!     { "expeditions": {}, "wagers": {} }
//!   ],
//!   "player2": [ ... ]
//! }
//! ```
//!
//! Cards are keyed `suit-rank` with lowercase suits and unpadded ranks; a wager
//! entry only exists for multipliers 2-4.
//! Any unknown suit, rank, or wager value makes the whole snapshot invalid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cards::{ExpeditionCard, Suit};
use crate::errors::{CardError, SnapshotError};
use crate::game::{reset_game, GameState, Player, ROUNDS_PER_GAME};
use crate::round::{RoundState, Wager};

/// Wire shape of one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// `suit-rank` keys of played cards; `false` entries count as not played
    #[serde(default)]
    pub expeditions: BTreeMap<String, bool>,
    /// Suit name to wager multiplier
    #[serde(default)]
    pub wagers: BTreeMap<String, u8>,
}

/// Wire shape of a whole game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub player1: [RoundSnapshot; ROUNDS_PER_GAME],
    pub player2: [RoundSnapshot; ROUNDS_PER_GAME],
}

impl From<&RoundState> for RoundSnapshot {
    fn from(state: &RoundState) -> Self {
        Self {
            expeditions: state
                .played_cards()
                .map(|card| (card.to_string(), true))
                .collect(),
            wagers: state
                .wagers()
                .map(|(suit, wager)| (suit.to_string(), wager.multiplier()))
                .collect(),
        }
    }
}

impl TryFrom<RoundSnapshot> for RoundState {
    type Error = SnapshotError;

    fn try_from(snap: RoundSnapshot) -> Result<Self, Self::Error> {
        let mut state = RoundState::new();
        for (key, played) in snap.expeditions {
            let card = card_key(&key)?;
            if played {
                state.insert_card(card);
            }
        }
        for (key, multiplier) in snap.wagers {
            let suit = suit_key(&key)?;
            let wager = Wager::new(multiplier)
                .filter(|w| w.is_placed())
                .ok_or(SnapshotError::InvalidWager { suit, multiplier })?;
            state.set_wager(suit, wager);
        }
        Ok(state)
    }
}

/// Parses a stored card key, accepting only the exact form written by `encode`.
fn card_key(key: &str) -> Result<ExpeditionCard, CardError> {
    let card: ExpeditionCard = key.parse()?;
    if card.to_string() != key {
        return Err(CardError::MalformedCard(key.to_string()));
    }
    Ok(card)
}

/// Parses a stored wager key; only lowercase suit names are valid.
fn suit_key(key: &str) -> Result<Suit, CardError> {
    let suit: Suit = key.parse()?;
    if suit.as_str() != key {
        return Err(CardError::UnknownSuit(key.to_string()));
    }
    Ok(suit)
}

impl From<GameState> for GameSnapshot {
    fn from(game: GameState) -> Self {
        let player = |p| game.rounds(p).each_ref().map(RoundSnapshot::from);
        Self {
            player1: player(Player::One),
            player2: player(Player::Two),
        }
    }
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = SnapshotError;

    fn try_from(snap: GameSnapshot) -> Result<Self, Self::Error> {
        let [a, b, c] = snap.player1;
        let [d, e, f] = snap.player2;
        Ok(GameState::from_rounds([
            [a.try_into()?, b.try_into()?, c.try_into()?],
            [d.try_into()?, e.try_into()?, f.try_into()?],
        ]))
    }
}

/// Serializes `game` to its snapshot text.
pub fn encode(game: &GameState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(game)?)
}

/// Parses snapshot text, rejecting anything that does not describe a valid game.
pub fn decode(text: &str) -> Result<GameState, SnapshotError> {
    Ok(serde_json::from_str(text)?)
}

/// Parses snapshot text, falling back to the empty game on any failure.
///
/// # Examples
///
/// ```
/// use lostcities_engine::game::reset_game;
/// use lostcities_engine::snapshot::decode_or_default;
///
/// assert_eq!(decode_or_default("{not json"), reset_game());
/// ```
pub fn decode_or_default(text: &str) -> GameState {
    decode(text).unwrap_or_else(|_| reset_game())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn round_snapshot_uses_card_keys() {
        let mut state = RoundState::new();
        state.insert_card(ExpeditionCard::new(Suit::Red, Rank::Ten));
        state.set_wager(Suit::Blue, Wager::new(3).unwrap());
        let snap = RoundSnapshot::from(&state);
        assert_eq!(snap.expeditions.get("red-10"), Some(&true));
        assert_eq!(snap.wagers.get("blue"), Some(&3));
    }

    #[test]
    fn false_entries_are_not_played() {
        let mut snap = RoundSnapshot::default();
        snap.expeditions.insert("white-4".into(), false);
        let state = RoundState::try_from(snap).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn card_key_must_be_canonical() {
        assert_eq!(
            card_key("red-5"),
            Ok(ExpeditionCard::new(Suit::Red, Rank::Five))
        );
        for key in ["RED-5", "Red-5", "red-05", "red-+5", " red-5", "red-5 "] {
            assert_eq!(
                card_key(key),
                Err(CardError::MalformedCard(key.to_string())),
                "{key:?}"
            );
        }
        assert_eq!(suit_key("green"), Ok(Suit::Green));
        assert_eq!(
            suit_key(" GREEN "),
            Err(CardError::UnknownSuit(" GREEN ".to_string()))
        );
    }

    #[test]
    fn stored_wager_of_one_is_rejected() {
        let mut snap = RoundSnapshot::default();
        snap.wagers.insert("green".into(), 1);
        let err = RoundState::try_from(snap).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::InvalidWager {
                suit: Suit::Green,
                multiplier: 1
            }
        ));
    }
}
