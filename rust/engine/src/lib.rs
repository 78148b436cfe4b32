//! # lostcities-engine: Lost Cities Scoring Core
//!
//! Scorekeeping for a two-player, three-round game of Lost Cities. Each round
//! records which numbered expedition cards a player laid down and how many
//! wager cards sit in front of each of the six expeditions; the engine turns
//! that into suit, round, and game scores.
//!
//! Everything here is pure: state changes return new values and never touch
//! the input, so earlier snapshots stay valid and can be shared freely.
//!
//! ## Core Modules
//!
//! - [`cards`] - Suits, ranks, and expedition card identity
//! - [`round`] - Per-round state, wagers, and the toggle/cycle transitions
//! - [`game`] - Two players by three rounds, round replacement and reset
//! - [`scoring`] - Suit, round, and game scores with per-suit breakdowns
//! - [`snapshot`] - Persisted JSON form and decode-with-default
//! - [`errors`] - Error types for parsing and snapshot decoding
//!
//! ## Quick Start
//!
//! ```rust
//! use lostcities_engine::cards::{ExpeditionCard, Rank, Suit};
//! use lostcities_engine::game::{apply_to_round, reset_game, Player, Round};
//! use lostcities_engine::round::{cycle_wager, toggle_expedition_card};
//! use lostcities_engine::scoring::{score_game, score_suit};
//!
//! let mut game = reset_game();
//! for rank in [Rank::Two, Rank::Three, Rank::Five] {
//!     let card = ExpeditionCard::new(Suit::Red, rank);
//!     game = apply_to_round(&game, Player::One, Round::First, |r| {
//!         toggle_expedition_card(r, card)
//!     });
//! }
//! game = apply_to_round(&game, Player::One, Round::First, |r| cycle_wager(r, Suit::Red));
//!
//! let round = game.round(Player::One, Round::First);
//! assert_eq!(score_suit(round, Suit::Red), -20);
//! assert_eq!(score_game(&game, Player::One), -20);
//! assert_eq!(score_game(&game, Player::Two), 0);
//! ```
//!
//! ## Persistence
//!
//! ```rust
//! use lostcities_engine::game::reset_game;
//! use lostcities_engine::snapshot::{decode, decode_or_default, encode};
//!
//! let game = reset_game();
//! let text = encode(&game).expect("encode");
//! assert_eq!(decode(&text).expect("decode"), game);
//!
//! // Corrupt input falls back to an empty game
//! assert_eq!(decode_or_default("garbage"), reset_game());
//! ```

pub mod cards;
pub mod errors;
pub mod game;
pub mod round;
pub mod scoring;
pub mod snapshot;
