//! A single 52-card deck with Fisher–Yates shuffling.

extern crate alloc;

use alloc::collections::VecDeque;

use log::trace;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, KING, Suit};
use crate::error::DeckError;
use crate::hand::Hand;

/// A deck of playing cards.
///
/// A new deck holds the 52 cards in canonical order: suits in [`Suit::ALL`]
/// order, ranks 1 through 13 within each suit. Cards are drawn from the
/// front.
///
/// # Example
///
/// ```
/// use vpoker::{Deck, DECK_SIZE};
///
/// let mut deck = Deck::new(42);
/// deck.shuffle();
/// let hand = deck.draw_hand().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// assert_eq!(deck.len(), DECK_SIZE - 5);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, front first.
    cards: VecDeque<Card>,
    /// Random number generator used by [`Deck::shuffle`].
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an unshuffled deck whose shuffles are driven by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an unshuffled deck that shuffles with the given generator.
    #[must_use]
    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cards: Self::canonical_cards(),
            rng,
        }
    }

    /// Builds the 52 cards in canonical order.
    fn canonical_cards() -> VecDeque<Card> {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=KING {
                cards.push_back(Card::new(rank, suit));
            }
        }

        cards
    }

    /// Shuffles the remaining cards in place using the deck's generator.
    ///
    /// The shuffle is Fisher–Yates, so every ordering is equally likely.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
        trace!("shuffled deck with {} cards", self.cards.len());
    }

    /// Shuffles the remaining cards in place using an external generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        trace!("shuffled deck with {} cards", self.cards.len());
    }

    /// Draws the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop_front().ok_or(DeckError::Empty)?;
        trace!("drew {card:?}, {} cards left", self.cards.len());
        Ok(card)
    }

    /// Draws the next five cards as a hand.
    ///
    /// Nothing is drawn if fewer than five cards remain.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if fewer than five cards are left.
    pub fn draw_hand(&mut self) -> Result<Hand, DeckError> {
        let remaining = self.cards.len();
        if remaining < HAND_SIZE {
            return Err(DeckError::NotEnoughCards { remaining });
        }

        let cards = [
            self.draw()?,
            self.draw()?,
            self.draw()?,
            self.draw()?,
            self.draw()?,
        ];

        Ok(Hand::new(cards))
    }

    /// Rebuilds the full deck in canonical order.
    ///
    /// The generator state is kept, so later shuffles continue its sequence.
    pub fn reset(&mut self) {
        self.cards = Self::canonical_cards();
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
