//! Error types for engine operations.

use thiserror::Error;

/// Broad classification of a [`GameError`].
///
/// Transports typically map both kinds to a client error; the split tells a
/// bad number apart from a move made at the wrong time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value violates a numeric bound.
    InvalidArgument,
    /// The operation is not legal in the current phase of the round.
    InvalidState,
}

/// Errors returned by [`RoundEngine`](crate::RoundEngine) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Bet amount is zero.
    #[error("bet amount must be positive")]
    ZeroBet,
    /// Bet exceeds the balance.
    #[error("bet exceeds balance")]
    InsufficientFunds,
    /// Balance cannot cover a second bet for doubling.
    #[error("insufficient balance to double down")]
    InsufficientFundsToDouble,
    /// Balance cannot cover a second bet for splitting.
    #[error("insufficient balance to split")]
    InsufficientFundsToSplit,
    /// Insurance above half the original bet.
    #[error("insurance cannot exceed half of the original bet")]
    InsuranceExceedsLimit,
    /// Balance cannot cover the insurance bet.
    #[error("insufficient balance for insurance")]
    InsufficientFundsForInsurance,
    /// Deck count outside 1 through 8.
    #[error("number of decks must be between 1 and 8")]
    InvalidDeckCount,
    /// Starting balance above [`MAX_STARTING_BALANCE`](crate::options::MAX_STARTING_BALANCE).
    #[error("starting balance is too large")]
    InvalidStartingBalance,
    /// Betting is closed for this round.
    #[error("cannot bet after cards are dealt")]
    BettingClosed,
    /// A round is still being played.
    #[error("round is still in progress")]
    RoundInProgress,
    /// The round is already settled.
    #[error("game is already over")]
    GameOver,
    /// There is no hand to act on.
    #[error("no active hand")]
    NoActiveHand,
    /// The hand was already doubled.
    #[error("already doubled down")]
    AlreadyDoubled,
    /// Doubling needs exactly two cards.
    #[error("can only double down on initial two cards")]
    NotInitialTwoCards,
    /// Splitting needs two cards of equal value.
    #[error("can only split a pair of equal value")]
    NotAPair,
    /// The dealer is not showing an ace.
    #[error("insurance is not offered")]
    InsuranceNotOffered,
    /// Insurance was already decided this round.
    #[error("insurance already resolved")]
    InsuranceAlreadyResolved,
    /// The player already acted on the hand.
    #[error("insurance must be resolved before any other action")]
    InsuranceAfterAction,
}

impl GameError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::ZeroBet
            | Self::InsufficientFunds
            | Self::InsufficientFundsToDouble
            | Self::InsufficientFundsToSplit
            | Self::InsuranceExceedsLimit
            | Self::InsufficientFundsForInsurance
            | Self::InvalidDeckCount
            | Self::InvalidStartingBalance => ErrorKind::InvalidArgument,
            Self::BettingClosed
            | Self::RoundInProgress
            | Self::GameOver
            | Self::NoActiveHand
            | Self::AlreadyDoubled
            | Self::NotInitialTwoCards
            | Self::NotAPair
            | Self::InsuranceNotOffered
            | Self::InsuranceAlreadyResolved
            | Self::InsuranceAfterAction => ErrorKind::InvalidState,
        }
    }
}
