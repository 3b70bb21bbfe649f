//! Hand evaluation integration tests.

use vpoker::{
    Card, Category, Deck, EvalOptions, Hand, HandError, HandEvaluator, RankGroups, StraightRule,
    Suit,
};

const fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn score(cards: [Card; 5]) -> vpoker::ScoreResult {
    HandEvaluator::default().score(&Hand::new(cards))
}

fn sequential() -> HandEvaluator {
    HandEvaluator::new(EvalOptions::default().with_straight(StraightRule::Sequential))
}

#[test]
fn royal_flush() {
    let cards = [
        card(1, Suit::Spades),
        card(10, Suit::Spades),
        card(11, Suit::Spades),
        card(12, Suit::Spades),
        card(13, Suit::Spades),
    ];
    let result = score(cards);
    assert_eq!(result.category, Category::RoyalFlush);
    assert_eq!(result.scoring_cards, cards);
    assert_eq!(result.payout(), 800);
}

#[test]
fn straight_flush() {
    let cards = [
        card(5, Suit::Hearts),
        card(6, Suit::Hearts),
        card(7, Suit::Hearts),
        card(8, Suit::Hearts),
        card(9, Suit::Hearts),
    ];
    let result = score(cards);
    assert_eq!(result.category, Category::StraightFlush);
    assert_eq!(result.scoring_cards, cards);
}

#[test]
fn four_of_a_kind() {
    let result = score([
        card(7, Suit::Clubs),
        card(7, Suit::Diamonds),
        card(7, Suit::Hearts),
        card(7, Suit::Spades),
        card(2, Suit::Clubs),
    ]);
    assert_eq!(result.category, Category::FourOfAKind);
    assert_eq!(
        result.scoring_cards,
        [
            card(7, Suit::Clubs),
            card(7, Suit::Diamonds),
            card(7, Suit::Hearts),
            card(7, Suit::Spades),
        ]
    );
}

#[test]
fn full_house_beats_three_of_a_kind() {
    let cards = [
        card(13, Suit::Clubs),
        card(13, Suit::Diamonds),
        card(13, Suit::Hearts),
        card(4, Suit::Spades),
        card(4, Suit::Clubs),
    ];
    let result = score(cards);
    assert_eq!(result.category, Category::FullHouse);
    assert_eq!(result.scoring_cards, cards);
}

#[test]
fn flush_and_straight() {
    let flush = [
        card(2, Suit::Diamonds),
        card(9, Suit::Diamonds),
        card(4, Suit::Diamonds),
        card(12, Suit::Diamonds),
        card(7, Suit::Diamonds),
    ];
    let result = score(flush);
    assert_eq!(result.category, Category::Flush);
    assert_eq!(result.scoring_cards, flush);

    let straight = [
        card(9, Suit::Clubs),
        card(5, Suit::Hearts),
        card(7, Suit::Spades),
        card(6, Suit::Diamonds),
        card(8, Suit::Clubs),
    ];
    let result = score(straight);
    assert_eq!(result.category, Category::Straight);
    assert_eq!(result.scoring_cards, straight);
}

#[test]
fn aces_play_low_and_high_in_straights() {
    let wheel = score([
        card(3, Suit::Clubs),
        card(1, Suit::Hearts),
        card(5, Suit::Spades),
        card(2, Suit::Diamonds),
        card(4, Suit::Clubs),
    ]);
    assert_eq!(wheel.category, Category::Straight);

    let broadway = score([
        card(12, Suit::Clubs),
        card(1, Suit::Hearts),
        card(10, Suit::Spades),
        card(13, Suit::Diamonds),
        card(11, Suit::Clubs),
    ]);
    assert_eq!(broadway.category, Category::Straight);

    let wrap_around = score([
        card(12, Suit::Clubs),
        card(13, Suit::Hearts),
        card(1, Suit::Spades),
        card(2, Suit::Diamonds),
        card(3, Suit::Clubs),
    ]);
    assert_eq!(wrap_around.category, Category::Nothing);

    let wheel_flush = score([
        card(1, Suit::Hearts),
        card(2, Suit::Hearts),
        card(3, Suit::Hearts),
        card(4, Suit::Hearts),
        card(5, Suit::Hearts),
    ]);
    assert_eq!(wheel_flush.category, Category::StraightFlush);
}

#[test]
fn three_of_a_kind() {
    let result = score([
        card(4, Suit::Clubs),
        card(9, Suit::Hearts),
        card(4, Suit::Spades),
        card(12, Suit::Diamonds),
        card(4, Suit::Hearts),
    ]);
    assert_eq!(result.category, Category::ThreeOfAKind);
    assert_eq!(
        result.scoring_cards,
        [
            card(4, Suit::Clubs),
            card(4, Suit::Spades),
            card(4, Suit::Hearts),
        ]
    );
}

#[test]
fn two_pair() {
    let result = score([
        card(2, Suit::Hearts),
        card(2, Suit::Clubs),
        card(9, Suit::Diamonds),
        card(9, Suit::Spades),
        card(5, Suit::Hearts),
    ]);
    assert_eq!(result.category, Category::TwoPair);
    assert_eq!(
        result.scoring_cards,
        [
            card(2, Suit::Hearts),
            card(2, Suit::Clubs),
            card(9, Suit::Diamonds),
            card(9, Suit::Spades),
        ]
    );

    // Pairs are reported lowest rank first regardless of hand order.
    let result = score([
        card(12, Suit::Hearts),
        card(3, Suit::Clubs),
        card(12, Suit::Diamonds),
        card(8, Suit::Spades),
        card(3, Suit::Hearts),
    ]);
    assert_eq!(result.category, Category::TwoPair);
    assert_eq!(
        result.scoring_cards,
        [
            card(3, Suit::Clubs),
            card(3, Suit::Hearts),
            card(12, Suit::Hearts),
            card(12, Suit::Diamonds),
        ]
    );
}

#[test]
fn jacks_or_better() {
    let result = score([
        card(11, Suit::Hearts),
        card(11, Suit::Diamonds),
        card(3, Suit::Spades),
        card(6, Suit::Clubs),
        card(9, Suit::Hearts),
    ]);
    assert_eq!(result.category, Category::JacksOrBetter);
    assert_eq!(
        result.scoring_cards,
        [card(11, Suit::Hearts), card(11, Suit::Diamonds)]
    );
    assert_eq!(result.payout(), 1);

    let aces = score([
        card(5, Suit::Hearts),
        card(1, Suit::Diamonds),
        card(3, Suit::Spades),
        card(1, Suit::Clubs),
        card(9, Suit::Hearts),
    ]);
    assert_eq!(aces.category, Category::JacksOrBetter);
    assert_eq!(
        aces.scoring_cards,
        [card(1, Suit::Diamonds), card(1, Suit::Clubs)]
    );
}

#[test]
fn low_pair_pays_nothing() {
    let result = score([
        card(3, Suit::Hearts),
        card(3, Suit::Clubs),
        card(4, Suit::Diamonds),
        card(6, Suit::Spades),
        card(9, Suit::Hearts),
    ]);
    assert_eq!(result.category, Category::Nothing);
    assert!(result.scoring_cards.is_empty());
    assert_eq!(result.payout(), 0);

    let tens = score([
        card(10, Suit::Hearts),
        card(10, Suit::Clubs),
        card(4, Suit::Diamonds),
        card(6, Suit::Spades),
        card(9, Suit::Hearts),
    ]);
    assert_eq!(tens.category, Category::Nothing);
}

#[test]
fn scoring_is_idempotent() {
    let evaluator = HandEvaluator::default();
    let mut deck = Deck::new(77);

    for _ in 0..20 {
        deck.reset();
        deck.shuffle();
        let hand = deck.draw_hand().unwrap();
        assert_eq!(evaluator.score(&hand), evaluator.score(&hand));
    }
}

#[test]
fn invalid_hand_sizes_are_rejected() {
    let evaluator = HandEvaluator::default();
    let four = [
        card(2, Suit::Hearts),
        card(3, Suit::Hearts),
        card(4, Suit::Hearts),
        card(5, Suit::Hearts),
    ];

    assert_eq!(
        evaluator.score_cards(&four).unwrap_err(),
        HandError::InvalidSize(4)
    );
    assert_eq!(
        evaluator.score_cards(&[]).unwrap_err(),
        HandError::InvalidSize(0)
    );

    let mut six = four.to_vec();
    six.extend([card(6, Suit::Hearts), card(7, Suit::Hearts)]);
    assert_eq!(Hand::try_from(six).unwrap_err(), HandError::InvalidSize(6));

    let five = [four[0], four[1], four[2], four[3], card(6, Suit::Hearts)];
    assert_eq!(
        evaluator.score_cards(&five).unwrap().category,
        Category::StraightFlush
    );
}

#[test]
fn sequential_rule_depends_on_card_order() {
    let evaluator = sequential();

    let sorted = Hand::new([
        card(5, Suit::Clubs),
        card(6, Suit::Hearts),
        card(7, Suit::Spades),
        card(8, Suit::Diamonds),
        card(9, Suit::Clubs),
    ]);
    assert_eq!(evaluator.score(&sorted).category, Category::Straight);

    let unsorted = Hand::new([
        card(9, Suit::Clubs),
        card(5, Suit::Hearts),
        card(7, Suit::Spades),
        card(6, Suit::Diamonds),
        card(8, Suit::Clubs),
    ]);
    assert_eq!(evaluator.score(&unsorted).category, Category::Nothing);

    // Steps 1 + 1 + 1 + 1 sum to four without being a run.
    let zigzag = Hand::new([
        card(5, Suit::Clubs),
        card(6, Suit::Hearts),
        card(5, Suit::Spades),
        card(6, Suit::Diamonds),
        card(7, Suit::Clubs),
    ]);
    assert_eq!(evaluator.score(&zigzag).category, Category::Straight);
    assert_eq!(
        HandEvaluator::default().score(&zigzag).category,
        Category::TwoPair
    );
}

#[test]
fn sequential_rule_never_finds_a_royal_flush() {
    let royal = Hand::new([
        card(1, Suit::Spades),
        card(10, Suit::Spades),
        card(11, Suit::Spades),
        card(12, Suit::Spades),
        card(13, Suit::Spades),
    ]);
    assert_eq!(sequential().score(&royal).category, Category::Flush);
}

#[test]
fn hand_predicates() {
    let hand = Hand::new([
        card(1, Suit::Clubs),
        card(10, Suit::Clubs),
        card(1, Suit::Clubs),
        card(12, Suit::Clubs),
        card(13, Suit::Clubs),
    ]);
    assert!(hand.is_flush());
    assert!(hand.contains_ranks(&[1, 1]));
    assert!(hand.contains_ranks(&[13, 1, 10]));
    assert!(!hand.contains_ranks(&[1, 1, 1]));
    assert!(!hand.contains_ranks(&[1, 10, 11, 12, 13]));

    let mixed = Hand::new([
        card(1, Suit::Clubs),
        card(10, Suit::Hearts),
        card(11, Suit::Clubs),
        card(12, Suit::Clubs),
        card(13, Suit::Clubs),
    ]);
    assert!(!mixed.is_flush());
    assert!(HandEvaluator::default().is_straight(&mixed));
}

#[test]
fn rank_groups() {
    let cards = [
        card(9, Suit::Hearts),
        card(2, Suit::Clubs),
        card(9, Suit::Spades),
        card(2, Suit::Diamonds),
        card(5, Suit::Hearts),
    ];
    let groups = RankGroups::new(&cards);

    assert_eq!(groups.len(), 3);
    assert_eq!(groups.has(1), Some(&[cards[4]][..]));
    assert_eq!(groups.has(2), Some(&[cards[1], cards[3]][..]));
    assert_eq!(groups.has(3), None);

    let pairs = groups.all(2).unwrap();
    assert_eq!(pairs, vec![&[cards[1], cards[3]][..], &[cards[0], cards[2]][..]]);
    assert!(groups.all(4).is_none());

    assert!(RankGroups::new(&[]).is_empty());
}

#[test]
fn paytable() {
    let payouts: Vec<u32> = Category::ALL.into_iter().map(Category::payout).collect();
    assert_eq!(payouts, [800, 50, 25, 9, 6, 4, 3, 2, 1, 0]);

    assert_eq!(Category::RoyalFlush.name(), "Royal Flush");
    assert_eq!(Category::JacksOrBetter.to_string(), "Jacks or Better");
    assert_eq!(Category::Nothing.name(), "Nothing");
}
