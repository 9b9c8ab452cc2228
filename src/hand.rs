//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::HandOutcome;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    // `aces` now counts the aces still worth 11.
    let is_soft = aces > 0;
    (value, is_soft)
}

/// Best blackjack total for `cards`.
///
/// Aces count 11 and drop to 1 one at a time while the total is over 21. A
/// hand that busts even with every ace at 1 reports that minimum total.
///
/// ```
/// use bjround::{Card, Rank, Suit, hand_value};
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::King, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Clubs),
/// ];
/// assert_eq!(hand_value(&cards), 12);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether `cards` total exactly 17 with an ace still counted as 11.
#[must_use]
pub fn is_soft_17(cards: &[Card]) -> bool {
    let (value, is_soft) = evaluate_cards(cards);
    value == 17 && is_soft
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Hand {
    cards: Vec<Card>,
    bet: usize,
    is_turn: bool,
    is_standing: bool,
    is_busted: bool,
    has_doubled_down: bool,
    outcome: HandOutcome,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            is_turn: false,
            is_standing: false,
            is_busted: false,
            has_doubled_down: false,
            outcome: HandOutcome::Pending,
        }
    }

    /// Creates a hand holding the card split off another hand.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        let mut hand = Self::new(bet);
        hand.cards.push(card);
        hand
    }

    /// Adds a card to the hand and returns the new value.
    pub(crate) fn add_card(&mut self, card: Card) -> u8 {
        self.cards.push(card);
        self.value()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet riding on this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether this hand is the one being played.
    #[must_use]
    pub const fn is_turn(&self) -> bool {
        self.is_turn
    }

    /// Returns whether the hand has stood (including after a bust or double).
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.is_standing
    }

    /// Returns whether the hand went over 21.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.is_busted
    }

    /// Returns whether the hand was doubled down.
    #[must_use]
    pub const fn has_doubled_down(&self) -> bool {
        self.has_doubled_down
    }

    /// Returns the settled outcome, or [`HandOutcome::Pending`].
    #[must_use]
    pub const fn outcome(&self) -> HandOutcome {
        self.outcome
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a pair of equal blackjack value.
    ///
    /// All ten-valued cards pair with each other; aces only pair with aces.
    #[must_use]
    pub fn can_split(&self) -> bool {
        match self.cards.as_slice() {
            [first, second] => first.value() == second.value(),
            _ => false,
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) const fn set_turn(&mut self, is_turn: bool) {
        self.is_turn = is_turn;
    }

    pub(crate) const fn mark_busted(&mut self) {
        self.is_busted = true;
    }

    pub(crate) const fn stand(&mut self) {
        self.is_standing = true;
        self.is_turn = false;
    }

    pub(crate) const fn double_bet(&mut self) {
        self.bet = self.bet.saturating_mul(2);
        self.has_doubled_down = true;
    }

    pub(crate) const fn set_outcome(&mut self, outcome: HandOutcome) {
        self.outcome = outcome;
    }

    /// Removes and returns the second card (for splitting).
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up card, which is the second card dealt.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    pub(crate) const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only the up card until the hole is revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card().map_or(0, |c| c.value())
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is exactly a soft 17.
    #[must_use]
    pub fn is_soft_17(&self) -> bool {
        is_soft_17(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
