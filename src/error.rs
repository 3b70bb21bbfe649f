//! Error types for deck and evaluation operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
    /// Not enough cards left to draw a full hand.
    #[error("not enough cards left in the deck: {remaining} remaining")]
    NotEnoughCards {
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when building or scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A hand must hold exactly five cards.
    #[error("hand must contain 5 cards, got {0}")]
    InvalidSize(usize),
}

/// Errors that can occur when naming a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside 1..=13.
    #[error("invalid card rank {0}")]
    InvalidRank(u8),
}
