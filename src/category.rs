//! Paytable categories and scoring results.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// A Jacks-or-Better paytable category.
///
/// Variants are listed from best to worst, which is also the order the
/// evaluator checks them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Ten through Ace of one suit.
    RoyalFlush,
    /// Five consecutive ranks of one suit.
    StraightFlush,
    /// Four cards of one rank.
    FourOfAKind,
    /// Three of one rank and two of another.
    FullHouse,
    /// Five cards of one suit.
    Flush,
    /// Five consecutive ranks.
    Straight,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Two pairs.
    TwoPair,
    /// A pair of Jacks, Queens, Kings or Aces.
    JacksOrBetter,
    /// No paying combination.
    Nothing,
}

impl Category {
    /// The full paytable, best category first.
    pub const ALL: [Self; 10] = [
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::ThreeOfAKind,
        Self::TwoPair,
        Self::JacksOrBetter,
        Self::Nothing,
    ];

    /// Returns the display name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RoyalFlush => "Royal Flush",
            Self::StraightFlush => "Straight Flush",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::Flush => "Flush",
            Self::Straight => "Straight",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::TwoPair => "Two Pair",
            Self::JacksOrBetter => "Jacks or Better",
            Self::Nothing => "Nothing",
        }
    }

    /// Returns the payout multiplier of the category.
    ///
    /// # Example
    ///
    /// ```
    /// use vpoker::Category;
    ///
    /// assert_eq!(Category::FullHouse.payout(), 9);
    /// assert_eq!(Category::Nothing.payout(), 0);
    /// ```
    #[must_use]
    pub const fn payout(self) -> u32 {
        match self {
            Self::RoyalFlush => 800,
            Self::StraightFlush => 50,
            Self::FourOfAKind => 25,
            Self::FullHouse => 9,
            Self::Flush => 6,
            Self::Straight => 4,
            Self::ThreeOfAKind => 3,
            Self::TwoPair => 2,
            Self::JacksOrBetter => 1,
            Self::Nothing => 0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of scoring a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    /// The matched category.
    pub category: Category,
    /// The cards that earned the category (empty for [`Category::Nothing`]).
    pub scoring_cards: Vec<Card>,
}

impl ScoreResult {
    /// Returns the payout multiplier of the matched category.
    #[must_use]
    pub const fn payout(&self) -> u32 {
        self.category.payout()
    }
}
