//! Hand classification against the Jacks-or-Better paytable.

extern crate alloc;

use alloc::vec::Vec;

use log::debug;

use crate::card::{ACE, Card, HAND_SIZE, JACK, KING, QUEEN};
use crate::category::{Category, ScoreResult};
use crate::error::HandError;
use crate::groups::RankGroups;
use crate::hand::Hand;
use crate::options::{EvalOptions, StraightRule};

/// Ranks of a royal flush, ascending.
const ROYAL_RANKS: [u8; HAND_SIZE] = [ACE, 10, JACK, QUEEN, KING];

/// Scores five-card hands.
///
/// Categories are checked from best to worst and the first match wins, so a
/// full house is never reported as three of a kind.
///
/// # Example
///
/// ```
/// use vpoker::{Card, Category, Hand, HandEvaluator, Suit};
///
/// let hand = Hand::new([
///     Card::new(11, Suit::Hearts),
///     Card::new(11, Suit::Diamonds),
///     Card::new(3, Suit::Spades),
///     Card::new(6, Suit::Clubs),
///     Card::new(9, Suit::Hearts),
/// ]);
///
/// let result = HandEvaluator::default().score(&hand);
/// assert_eq!(result.category, Category::JacksOrBetter);
/// assert_eq!(result.scoring_cards, hand.cards()[..2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator {
    /// Evaluator options.
    pub options: EvalOptions,
}

impl HandEvaluator {
    /// Creates an evaluator with the given options.
    #[must_use]
    pub const fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    /// Returns whether the hand is a straight under the configured rule.
    #[must_use]
    pub fn is_straight(&self, hand: &Hand) -> bool {
        match self.options.straight {
            StraightRule::Ranked => is_ranked_straight(hand.cards()),
            StraightRule::Sequential => is_sequential_straight(hand.cards()),
        }
    }

    /// Scores a hand.
    #[must_use]
    pub fn score(&self, hand: &Hand) -> ScoreResult {
        let (category, scoring_cards) = self.classify(hand);
        debug!("scored {:?} as {category}", hand.cards());

        ScoreResult {
            category,
            scoring_cards,
        }
    }

    /// Scores a slice of cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidSize`] unless exactly five cards are given.
    pub fn score_cards(&self, cards: &[Card]) -> Result<ScoreResult, HandError> {
        let hand = Hand::try_from(cards)?;
        Ok(self.score(&hand))
    }

    fn classify(&self, hand: &Hand) -> (Category, Vec<Card>) {
        let cards = hand.cards();
        let flush = hand.is_flush();
        let straight = self.is_straight(hand);
        let groups = RankGroups::new(cards);

        if flush && straight {
            if hand.contains_ranks(&ROYAL_RANKS) {
                return (Category::RoyalFlush, cards.to_vec());
            }
            return (Category::StraightFlush, cards.to_vec());
        }

        if let Some(quads) = groups.has(4) {
            return (Category::FourOfAKind, quads.to_vec());
        }

        let trips = groups.has(3);
        if trips.is_some() && groups.has(2).is_some() {
            return (Category::FullHouse, cards.to_vec());
        }

        if flush {
            return (Category::Flush, cards.to_vec());
        }

        if straight {
            return (Category::Straight, cards.to_vec());
        }

        if let Some(trips) = trips {
            return (Category::ThreeOfAKind, trips.to_vec());
        }

        if let Some(pairs) = groups.all(2).filter(|pairs| pairs.len() == 2) {
            return (Category::TwoPair, pairs.concat());
        }

        if let Some(pair) = groups.has(2).filter(|pair| is_high_pair(pair)) {
            return (Category::JacksOrBetter, pair.to_vec());
        }

        (Category::Nothing, Vec::new())
    }
}

/// Jacks, Queens, Kings and Aces.
fn is_high_pair(pair: &[Card]) -> bool {
    pair.first().is_some_and(|card| card.rank == ACE || card.rank >= JACK)
}

/// Five distinct ranks with a span of four, or the Ace-high run.
fn is_ranked_straight(cards: &[Card; HAND_SIZE]) -> bool {
    let mut ranks = cards.map(|card| card.rank);
    ranks.sort_unstable();

    if ranks == ROYAL_RANKS {
        return true;
    }

    let distinct = ranks.windows(2).all(|w| w[0] < w[1]);
    distinct && ranks[HAND_SIZE - 1] - ranks[0] == 4
}

/// Sum of absolute rank steps in held order equals four.
fn is_sequential_straight(cards: &[Card; HAND_SIZE]) -> bool {
    let steps: u32 = cards
        .windows(2)
        .map(|w| u32::from(w[0].rank.abs_diff(w[1].rank)))
        .sum();
    steps == 4
}
