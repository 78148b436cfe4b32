use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::cards::{ExpeditionCard, Rank, Suit};

/// Wager multiplier for one suit in one round.
/// `1` means no wager card was placed; `2`-`4` count stacked wager cards plus one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(into = "u8")]
pub struct Wager(u8);

impl Wager {
    /// No wager placed (multiplier 1).
    pub const NONE: Wager = Wager(1);
    /// Highest multiplier: three wager cards.
    pub const MAX: Wager = Wager(4);

    pub fn new(multiplier: u8) -> Option<Wager> {
        (Self::NONE.0..=Self::MAX.0)
            .contains(&multiplier)
            .then_some(Wager(multiplier))
    }

    pub fn multiplier(self) -> u8 {
        self.0
    }

    pub fn is_placed(self) -> bool {
        self.0 > Self::NONE.0
    }

    /// Number of wager cards behind this multiplier.
    pub fn cards(self) -> u32 {
        u32::from(self.0 - 1)
    }

    /// Next multiplier in the 1 -> 2 -> 3 -> 4 -> 1 cycle.
    pub fn next(self) -> Wager {
        if self == Self::MAX {
            Self::NONE
        } else {
            Wager(self.0 + 1)
        }
    }
}

impl Default for Wager {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Wager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<Wager> for u8 {
    fn from(w: Wager) -> Self {
        w.0
    }
}

/// Everything recorded for one player in one round: which expedition cards
/// were played and which suits carry a wager.
///
/// Only suits with a placed wager have an entry in the wager map, so two
/// rounds with the same cards and multipliers always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundState {
    /// Played expedition cards across all suits
    expeditions: BTreeSet<ExpeditionCard>,
    /// Multipliers above 1, keyed by suit
    wagers: BTreeMap<Suit, Wager>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_played(&self, card: ExpeditionCard) -> bool {
        self.expeditions.contains(&card)
    }

    pub fn played_cards(&self) -> impl Iterator<Item = ExpeditionCard> + '_ {
        self.expeditions.iter().copied()
    }

    /// Ranks played in `suit`, lowest first.
    pub fn ranks_in(&self, suit: Suit) -> impl Iterator<Item = Rank> + '_ {
        self.expeditions
            .iter()
            .filter(move |c| c.suit == suit)
            .map(|c| c.rank)
    }

    pub fn wager(&self, suit: Suit) -> Wager {
        self.wagers.get(&suit).copied().unwrap_or_default()
    }

    /// Suits carrying a wager, with their multipliers.
    pub fn wagers(&self) -> impl Iterator<Item = (Suit, Wager)> + '_ {
        self.wagers.iter().map(|(&s, &w)| (s, w))
    }

    pub fn is_empty(&self) -> bool {
        self.expeditions.is_empty() && self.wagers.is_empty()
    }

    pub(crate) fn insert_card(&mut self, card: ExpeditionCard) {
        self.expeditions.insert(card);
    }

    pub(crate) fn set_wager(&mut self, suit: Suit, wager: Wager) {
        if wager.is_placed() {
            self.wagers.insert(suit, wager);
        } else {
            self.wagers.remove(&suit);
        }
    }
}

/// Returns `state` with `card` removed if it was played, or added if it was not.
///
/// Play order is not checked: cards may be toggled in any sequence.
///
/// # Examples
///
/// ```
/// use lostcities_engine::cards::{ExpeditionCard, Rank, Suit};
/// use lostcities_engine::round::{toggle_expedition_card, RoundState};
///
/// let card = ExpeditionCard::new(Suit::Red, Rank::Five);
/// let empty = RoundState::new();
/// let played = toggle_expedition_card(&empty, card);
/// assert!(played.is_played(card));
/// assert_eq!(toggle_expedition_card(&played, card), empty);
/// ```
pub fn toggle_expedition_card(state: &RoundState, card: ExpeditionCard) -> RoundState {
    let mut next = state.clone();
    if !next.expeditions.remove(&card) {
        next.expeditions.insert(card);
    }
    next
}

/// Returns `state` with the wager on `suit` advanced one step (1 -> 2 -> 3 -> 4 -> 1).
///
/// # Examples
///
/// ```
/// use lostcities_engine::cards::Suit;
/// use lostcities_engine::round::{cycle_wager, RoundState};
///
/// let once = cycle_wager(&RoundState::new(), Suit::Blue);
/// assert_eq!(once.wager(Suit::Blue).multiplier(), 2);
/// ```
pub fn cycle_wager(state: &RoundState, suit: Suit) -> RoundState {
    let mut next = state.clone();
    next.set_wager(suit, state.wager(suit).next());
    next
}
