//! Five-card hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, HAND_SIZE};
use crate::error::HandError;

/// A five-card hand, kept in the order the cards were given.
///
/// Duplicate cards are not rejected; hands drawn from one [`Deck`] are always
/// distinct.
///
/// [`Deck`]: crate::Deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Cards in the hand.
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from five cards.
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns whether every card shares the first card's suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|card| card.suit == suit)
    }

    /// Returns whether each rank in `targets` is matched by a distinct card.
    ///
    /// A card satisfies at most one target, so `[1, 1]` needs two aces.
    #[must_use]
    pub fn contains_ranks(&self, targets: &[u8]) -> bool {
        let mut used = [false; HAND_SIZE];

        targets.iter().all(|&rank| {
            let Some(i) = (0..HAND_SIZE).find(|&i| !used[i] && self.cards[i].rank == rank) else {
                return false;
            };
            used[i] = true;
            true
        })
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self::new(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        <[Card; HAND_SIZE]>::try_from(cards)
            .map(Self::new)
            .map_err(|_| HandError::InvalidSize(cards.len()))
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_from(cards.as_slice())
    }
}
