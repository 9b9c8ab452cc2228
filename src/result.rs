//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

/// Settlement state of a hand or of the insurance side bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum HandOutcome {
    /// Not settled yet.
    #[default]
    Pending,
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Loss,
    /// Push; the bet is returned.
    Tie,
}

impl HandOutcome {
    /// Returns whether the outcome has been settled.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct HandResult {
    /// Position of the hand in play order.
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet riding on the hand, including any double.
    pub bet: usize,
    /// Amount credited back to the balance.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RoundResult {
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a two-card 21.
    pub dealer_blackjack: bool,
    /// Insurance bet amount (0 if none was taken).
    pub insurance_bet: usize,
    /// Insurance payout (0 unless the dealer had blackjack).
    pub insurance_payout: usize,
    /// Net result across hands and insurance (positive = profit).
    pub net: isize,
}

impl RoundResult {
    /// Total amount credited back for the hands, excluding insurance.
    #[must_use]
    pub fn total_payout(&self) -> usize {
        self.hands.iter().map(|h| h.payout).sum()
    }
}
