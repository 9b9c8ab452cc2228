//! Table configuration options.

use crate::error::GameError;
use crate::shoe::LOW_CARD_THRESHOLD;

/// Fewest decks a shoe may hold.
pub const MIN_DECKS: u8 = 1;
/// Most decks a shoe may hold.
pub const MAX_DECKS: u8 = 8;
/// Balance a fresh session starts with.
pub const STARTING_BALANCE: usize = 1000;
/// Largest accepted starting balance. Keeps a 3x insurance payout on top of
/// the balance within `usize`.
pub const MAX_STARTING_BALANCE: usize = usize::MAX / 4;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_dealer_hits_on_soft_17(true);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GameOptions {
    /// Number of decks in the shoe (1 through 8).
    pub decks: u8,
    /// Whether the dealer draws on a soft 17.
    pub dealer_hits_on_soft_17: bool,
    /// Balance after a reset.
    pub starting_balance: usize,
    /// Rebuild the shoe at round start when fewer cards than this remain.
    /// 0 disables the low-shoe check.
    pub reshuffle_below: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: MIN_DECKS,
            dealer_hits_on_soft_17: false,
            starting_balance: STARTING_BALANCE,
            reshuffle_below: LOW_CARD_THRESHOLD,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the dealer hits on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_hits_on_soft_17(true);
    /// assert!(options.dealer_hits_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_on_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_on_soft_17 = hits;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the low-shoe reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_below(0);
    /// assert_eq!(options.reshuffle_below, 0);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_below(mut self, cards: usize) -> Self {
        self.reshuffle_below = cards;
        self
    }

    /// Checks the options for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDeckCount`] if `decks` is outside 1 through 8.
    pub const fn validate(&self) -> Result<(), GameError> {
        if self.decks < MIN_DECKS || self.decks > MAX_DECKS {
            return Err(GameError::InvalidDeckCount);
        }
        if self.starting_balance > MAX_STARTING_BALANCE {
            return Err(GameError::InvalidStartingBalance);
        }
        Ok(())
    }
}
