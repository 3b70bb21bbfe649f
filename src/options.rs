//! Evaluator configuration options.

/// How straights are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum StraightRule {
    /// Five distinct ranks spanning four steps, in any order. Aces play low
    /// (A-2-3-4-5) or high (10-J-Q-K-A).
    #[default]
    Ranked,
    /// Absolute differences between neighbouring cards, in held order, sum to
    /// four. Only meaningful for hands already sorted by rank; Aces never play
    /// high, so a royal flush cannot be detected.
    Sequential,
}

/// Configuration options for a [`HandEvaluator`].
///
/// Use the builder pattern to customize options:
///
/// ```
/// use vpoker::{EvalOptions, StraightRule};
///
/// let options = EvalOptions::default().with_straight(StraightRule::Sequential);
/// assert_eq!(options.straight, StraightRule::Sequential);
/// ```
///
/// [`HandEvaluator`]: crate::HandEvaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalOptions {
    /// Straight detection rule.
    pub straight: StraightRule,
}

impl EvalOptions {
    /// Sets the straight detection rule.
    #[must_use]
    pub const fn with_straight(mut self, straight: StraightRule) -> Self {
        self.straight = straight;
        self
    }
}
