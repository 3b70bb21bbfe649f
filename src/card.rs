//! Card types and display names.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank names indexed by `rank - 1`.
const RANK_NAMES: [&str; 13] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Names for ranks outside
    /// 1..=13 fail with [`CardError::InvalidRank`], see [`Card::try_new`] for a
    /// checked constructor.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a new card, rejecting ranks outside 1..=13.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is out of range.
    pub const fn try_new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        let card = Self::new(rank, suit);
        if card.is_valid() {
            Ok(card)
        } else {
            Err(CardError::InvalidRank(rank))
        }
    }

    /// Returns whether the rank is within 1..=13.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rank >= ACE && self.rank <= KING
    }

    /// Returns the rank name, e.g. `"Queen"` or `"7"`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is out of range.
    pub fn rank_name(&self) -> Result<&'static str, CardError> {
        usize::from(self.rank)
            .checked_sub(1)
            .and_then(|index| RANK_NAMES.get(index))
            .copied()
            .ok_or(CardError::InvalidRank(self.rank))
    }

    /// Returns the suit name.
    #[must_use]
    pub const fn suit_name(&self) -> &'static str {
        self.suit.name()
    }

    /// Returns the full card name, e.g. `"Ace of Spades"`.
    ///
    /// # Example
    ///
    /// ```
    /// use vpoker::{Card, Suit};
    ///
    /// let card = Card::new(12, Suit::Hearts);
    /// assert_eq!(card.name().unwrap(), "Queen of Hearts");
    /// assert!(Card::new(14, Suit::Hearts).name().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is out of range.
    pub fn name(&self) -> Result<String, CardError> {
        Ok(format!("{} of {}", self.rank_name()?, self.suit_name()))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in a scored hand.
pub const HAND_SIZE: usize = 5;
