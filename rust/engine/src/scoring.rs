use serde::Serialize;

use crate::cards::{all_suits, Suit};
use crate::game::{GameState, Player, ROUNDS_PER_GAME};
use crate::round::{RoundState, Wager};

/// Points an expedition owes as soon as it is started.
pub const EXPEDITION_COST: i32 = 20;
/// Cards (wagers included) needed in one suit to earn the bonus.
pub const BONUS_THRESHOLD: u32 = 8;
/// Flat bonus for a long expedition; never multiplied by the wager.
pub const BONUS_POINTS: i32 = 20;

/// How a single suit's score is put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuitScore {
    pub suit: Suit,
    /// Sum of the played ranks
    pub card_total: i32,
    /// Played ranks plus wager cards
    pub card_count: u32,
    pub wager: Wager,
    /// Card total less the expedition cost, or 0 if nothing was started
    pub roi: i32,
    pub bonus: i32,
    pub score: i32,
}

/// Computes the score breakdown for `suit` in one round.
///
/// Wager cards count toward the bonus threshold but carry no points, so a
/// wager with no numbered cards still starts the expedition at `-20`.
///
/// # Examples
///
/// ```
/// use lostcities_engine::cards::{ExpeditionCard, Rank, Suit};
/// use lostcities_engine::round::{cycle_wager, toggle_expedition_card, RoundState};
/// use lostcities_engine::scoring::suit_breakdown;
///
/// let mut round = RoundState::new();
/// for rank in [Rank::Two, Rank::Three, Rank::Five] {
///     round = toggle_expedition_card(&round, ExpeditionCard::new(Suit::Red, rank));
/// }
/// round = cycle_wager(&round, Suit::Red);
///
/// let s = suit_breakdown(&round, Suit::Red);
/// assert_eq!(s.card_count, 4);
/// assert_eq!(s.roi, -10);
/// assert_eq!(s.score, -20);
/// ```
pub fn suit_breakdown(state: &RoundState, suit: Suit) -> SuitScore {
    let (card_total, played) = state
        .ranks_in(suit)
        .fold((0, 0u32), |(sum, n), rank| (sum + rank.value(), n + 1));
    let wager = state.wager(suit);
    let card_count = played + wager.cards();

    let roi = if card_count == 0 {
        0
    } else {
        card_total - EXPEDITION_COST
    };
    let bonus = if card_count >= BONUS_THRESHOLD {
        BONUS_POINTS
    } else {
        0
    };

    SuitScore {
        suit,
        card_total,
        card_count,
        wager,
        roi,
        bonus,
        score: roi * i32::from(wager.multiplier()) + bonus,
    }
}

pub fn score_suit(state: &RoundState, suit: Suit) -> i32 {
    suit_breakdown(state, suit).score
}

/// Breakdowns for all six suits, in display order.
pub fn round_breakdown(state: &RoundState) -> [SuitScore; 6] {
    all_suits().map(|suit| suit_breakdown(state, suit))
}

pub fn score_round(state: &RoundState) -> i32 {
    all_suits().iter().map(|&s| score_suit(state, s)).sum()
}

/// Round scores for `player`, first round first.
pub fn round_scores(game: &GameState, player: Player) -> [i32; ROUNDS_PER_GAME] {
    game.rounds(player).each_ref().map(score_round)
}

pub fn score_game(game: &GameState, player: Player) -> i32 {
    round_scores(game, player).iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ExpeditionCard, Rank};
    use crate::round::{cycle_wager, toggle_expedition_card};

    fn play(state: RoundState, suit: Suit, ranks: &[Rank]) -> RoundState {
        ranks.iter().fold(state, |acc, &r| {
            toggle_expedition_card(&acc, ExpeditionCard::new(suit, r))
        })
    }

    #[test]
    fn untouched_suit_scores_zero() {
        let s = suit_breakdown(&RoundState::new(), Suit::Purple);
        assert_eq!(s.card_count, 0);
        assert_eq!(s.roi, 0);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn bonus_is_not_multiplied() {
        // 4..=10 is seven cards plus one wager card: eight in total.
        let ranks = [
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
        ];
        let round = cycle_wager(&play(RoundState::new(), Suit::Green, &ranks), Suit::Green);
        let s = suit_breakdown(&round, Suit::Green);
        assert_eq!(s.card_total, 49);
        assert_eq!(s.card_count, 8);
        assert_eq!(s.bonus, BONUS_POINTS);
        assert_eq!(s.score, (49 - 20) * 2 + 20);
    }

    #[test]
    fn wager_cards_alone_reach_bonus_threshold() {
        // three wagers and five cards
        let ranks = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six];
        let mut round = play(RoundState::new(), Suit::Yellow, &ranks);
        for _ in 0..3 {
            round = cycle_wager(&round, Suit::Yellow);
        }
        let s = suit_breakdown(&round, Suit::Yellow);
        assert_eq!(s.card_count, 8);
        assert_eq!(s.roi, 0);
        assert_eq!(s.score, 20);
    }

    #[test]
    fn round_breakdown_follows_suit_order() {
        let suits: Vec<Suit> = round_breakdown(&RoundState::new())
            .iter()
            .map(|s| s.suit)
            .collect();
        assert_eq!(suits, all_suits().to_vec());
    }
}
