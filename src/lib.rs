//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundEngine`] that owns one session's table: the
//! shoe, the player's hands, the dealer's hand and the chip balance. It runs
//! the round flow of betting, dealing, player actions, insurance, dealer play
//! and payout. A transport layer owns one engine per session and calls its
//! operations; [`RoundEngine::snapshot`] gives it a read model to serialize.
//!
//! # Example
//!
//! ```
//! use bjround::{GameOptions, RoundEngine};
//!
//! let mut engine = RoundEngine::new(GameOptions::default(), 42).unwrap();
//! engine.place_bet(100).unwrap();
//! engine.deal_initial_cards().unwrap();
//! assert_eq!(engine.balance(), 900);
//!
//! engine.stand().unwrap();
//! assert!(engine.is_game_over());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ErrorKind, GameError};
pub use game::{Phase, RoundEngine};
pub use hand::{DealerHand, Hand, hand_value, is_soft_17};
pub use options::{GameOptions, MAX_DECKS, MAX_STARTING_BALANCE, MIN_DECKS, STARTING_BALANCE};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use shoe::{LOW_CARD_THRESHOLD, Shoe};
pub use snapshot::TableSnapshot;
