//! Grouping of cards by rank.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::card::Card;

/// Cards grouped by rank, iterated in ascending rank order.
///
/// # Example
///
/// ```
/// use vpoker::{Card, RankGroups, Suit};
///
/// let cards = [
///     Card::new(9, Suit::Hearts),
///     Card::new(2, Suit::Clubs),
///     Card::new(9, Suit::Spades),
/// ];
/// let groups = RankGroups::new(&cards);
/// assert_eq!(groups.has(2), Some(&[cards[0], cards[2]][..]));
/// assert_eq!(groups.has(3), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    /// Rank to the cards of that rank, in the order they were given.
    groups: BTreeMap<u8, Vec<Card>>,
}

impl RankGroups {
    /// Groups `cards` by rank.
    #[must_use]
    pub fn new(cards: &[Card]) -> Self {
        let mut groups: BTreeMap<u8, Vec<Card>> = BTreeMap::new();
        for card in cards {
            groups.entry(card.rank).or_default().push(*card);
        }
        Self { groups }
    }

    /// Returns the lowest-ranked group with exactly `n` cards.
    #[must_use]
    pub fn has(&self, n: usize) -> Option<&[Card]> {
        self.groups
            .values()
            .find(|group| group.len() == n)
            .map(Vec::as_slice)
    }

    /// Returns every group with exactly `n` cards, lowest rank first.
    ///
    /// Returns `None` rather than an empty list when no group matches.
    #[must_use]
    pub fn all(&self, n: usize) -> Option<Vec<&[Card]>> {
        let matches: Vec<&[Card]> = self
            .groups
            .values()
            .filter(|group| group.len() == n)
            .map(Vec::as_slice)
            .collect();

        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }

    /// Returns the number of distinct ranks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns whether no cards were grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
