use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::CardError;

/// One of the six color-coded expeditions.
/// Each suit is scored independently within a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Yellow,
    Blue,
    White,
    Green,
    Red,
    Purple,
}

impl Suit {
    /// Lowercase name used in card keys and snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Yellow => "yellow",
            Suit::Blue => "blue",
            Suit::White => "white",
            Suit::Green => "green",
            Suit::Red => "red",
            Suit::Purple => "purple",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_suits()
            .into_iter()
            .find(|suit| suit.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::UnknownSuit(s.to_string()))
    }
}

/// Face value of an expedition card, Two through Ten.
/// The discriminant is the number of points the card is worth.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            _ => None,
        }
    }

    /// Points contributed by this card.
    pub fn value(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Rank::from_u8)
            .ok_or_else(|| CardError::UnknownRank(s.to_string()))
    }
}

/// A numbered expedition card, identified by its suit and rank.
/// Only one card exists per pair, so a round records it as either played or not.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ExpeditionCard {
    /// The expedition this card belongs to
    pub suit: Suit,
    /// The card's face value (2-10)
    pub rank: Rank,
}

impl ExpeditionCard {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// Formats as the `suit-rank` key, e.g. `red-5`.
impl fmt::Display for ExpeditionCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}

impl FromStr for ExpeditionCard {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = s
            .split_once('-')
            .ok_or_else(|| CardError::MalformedCard(s.to_string()))?;
        Ok(Self {
            suit: suit.parse()?,
            rank: rank.parse()?,
        })
    }
}

pub fn all_suits() -> [Suit; 6] {
    [
        Suit::Yellow,
        Suit::Blue,
        Suit::White,
        Suit::Green,
        Suit::Red,
        Suit::Purple,
    ]
}

pub fn all_ranks() -> [Rank; 9] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
    ]
}

/// Every numbered card in the game, suit by suit.
pub fn expedition_cards() -> Vec<ExpeditionCard> {
    let mut v = Vec::with_capacity(54);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(ExpeditionCard { suit: s, rank: r });
        }
    }
    v
}
