//! A Jacks-or-Better video poker scoring engine with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that deals cards after an unbiased shuffle
//! and a [`HandEvaluator`] that classifies a five-card [`Hand`] into one of
//! the ten paytable [`Category`] values, reporting the cards that earned it.
//!
//! # Example
//!
//! ```
//! use vpoker::{Deck, HandEvaluator};
//!
//! let mut deck = Deck::new(42);
//! deck.shuffle();
//!
//! let hand = deck.draw_hand().unwrap();
//! let result = HandEvaluator::default().score(&hand);
//! println!("{} pays {}", result.category, result.payout());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod deck;
pub mod error;
pub mod eval;
pub mod groups;
pub mod hand;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Suit};
pub use category::{Category, ScoreResult};
pub use deck::Deck;
pub use error::{CardError, DeckError, HandError};
pub use eval::HandEvaluator;
pub use groups::RankGroups;
pub use hand::Hand;
pub use options::{EvalOptions, StraightRule};
