//! The dealing shoe.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Cards left in the shoe below which a new round reshuffles.
pub const LOW_CARD_THRESHOLD: usize = 20;

/// A shoe of one or more shuffled decks. Cards are drawn from the front.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: VecDeque<Card>,
    decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled shoe of `decks` decks.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut shoe = Self {
            cards: VecDeque::new(),
            decks,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.initialize(decks);
        shoe
    }

    /// Rebuilds the shoe with `decks` full decks and shuffles it.
    pub fn initialize(&mut self, decks: u8) {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards.shuffle(&mut self.rng);
        self.cards = cards.into();
        self.decks = decks;
    }

    /// Replaces the shoe contents with `cards`, drawn in the given order.
    ///
    /// The deck count is left unchanged, so the next round will not rebuild
    /// the shoe unless it runs low.
    pub fn stack<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards = cards.into_iter().collect();
    }

    /// Removes and returns the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Number of decks the shoe was built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether a round starting now should rebuild the shoe, either
    /// because the deck count changed or fewer than `threshold` cards remain.
    #[must_use]
    pub fn needs_reshuffle(&self, decks: u8, threshold: usize) -> bool {
        self.decks != decks || self.cards.len() < threshold
    }
}
