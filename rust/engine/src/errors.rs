use thiserror::Error;

use crate::cards::Suit;

/// Failure to parse a suit, rank, or `suit-rank` card key from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Unknown suit: {0}")]
    UnknownSuit(String),
    #[error("Unknown rank: {0} (expected 2-10)")]
    UnknownRank(String),
    #[error("Malformed card key: {0} (expected suit-rank, e.g. red-5)")]
    MalformedCard(String),
}

/// Failure to decode a persisted game snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Invalid card in snapshot: {0}")]
    Card(#[from] CardError),
    #[error("Invalid wager for {suit}: {multiplier} (expected 2-4)")]
    InvalidWager { suit: Suit, multiplier: u8 },
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
