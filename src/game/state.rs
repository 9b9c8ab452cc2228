//! Round phase summary.

/// Where the engine is in the round cycle.
///
/// Derived from the engine flags; see [`RoundEngine::phase`](crate::RoundEngine::phase).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Phase {
    /// Betting is open and no round has been played yet.
    AwaitingBet,
    /// A bet is pending and the cards can be dealt.
    BetPlaced,
    /// Hands are in play and waiting for player actions.
    PlayerTurn,
    /// The last round is settled; betting is open again.
    RoundOver,
}
