//! Read-only view of the table for transports.

extern crate alloc;

use alloc::vec::Vec;

use crate::game::{Phase, RoundEngine};
use crate::hand::{DealerHand, Hand};
use crate::result::HandOutcome;

/// Everything a client needs to render the table, copied out of a
/// [`RoundEngine`].
///
/// With the `serde` feature the snapshot serializes with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TableSnapshot {
    /// Player hands in play order.
    pub player_hands: Vec<Hand>,
    /// Dealer's hand.
    pub dealer_hand: DealerHand,
    /// Index of the hand being played.
    pub current_hand_index: usize,
    /// Round phase.
    pub phase: Phase,
    /// Whether the last round has been settled.
    pub game_over: bool,
    /// Player balance.
    pub balance: usize,
    /// Amount currently wagered.
    pub current_bet: usize,
    /// Whether a bet may be placed.
    pub betting_open: bool,
    /// Cards remaining in the shoe.
    pub deck_size: usize,
    /// Whether the dealer hits on soft 17.
    pub dealer_hits_on_soft_17: bool,
    /// Configured number of decks.
    pub number_of_decks: u8,
    /// Whether any hand this round was doubled down.
    pub has_doubled_down: bool,
    /// Insurance side bet.
    pub insurance_bet: usize,
    /// Whether insurance was offered.
    pub insurance_offered: bool,
    /// Whether insurance was decided.
    pub insurance_resolved: bool,
    /// How insurance settled.
    pub insurance_outcome: HandOutcome,
    /// Largest insurance bet currently allowed.
    pub max_insurance_bet: usize,
}

impl From<&RoundEngine> for TableSnapshot {
    fn from(engine: &RoundEngine) -> Self {
        Self {
            player_hands: engine.player_hands().to_vec(),
            dealer_hand: engine.dealer_hand().clone(),
            current_hand_index: engine.current_hand_index(),
            phase: engine.phase(),
            game_over: engine.is_game_over(),
            balance: engine.balance(),
            current_bet: engine.current_bet(),
            betting_open: engine.is_betting_open(),
            deck_size: engine.shoe_size(),
            dealer_hits_on_soft_17: engine.dealer_hits_on_soft_17(),
            number_of_decks: engine.number_of_decks(),
            has_doubled_down: engine.has_doubled_down(),
            insurance_bet: engine.insurance_bet(),
            insurance_offered: engine.is_insurance_offered(),
            insurance_resolved: engine.is_insurance_resolved(),
            insurance_outcome: engine.insurance_outcome(),
            max_insurance_bet: engine.max_insurance_bet(),
        }
    }
}

impl RoundEngine {
    /// Captures the current table state.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::from(self)
    }
}
