//! Round engine and state management.

use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::error::GameError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::{HandOutcome, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use state::Phase;

/// A single-player blackjack engine owning one session's table.
///
/// The engine owns the shoe, the player's hands, the dealer's hand and the
/// balance ledger. Every operation takes `&mut self` and runs to completion;
/// a failed operation leaves the state untouched.
///
/// A round runs [`place_bet`](Self::place_bet), then
/// [`deal_initial_cards`](Self::deal_initial_cards), then any mix of
/// [`hit`](Self::hit), [`stand`](Self::stand), [`double_down`](Self::double_down),
/// [`split`](Self::split) and [`resolve_insurance`](Self::resolve_insurance)
/// until the last hand stands and the dealer settles.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    /// Table rules.
    options: GameOptions,
    /// Cards in the shoe.
    shoe: Shoe,
    /// Chips the player holds, excluding bets on the table.
    balance: usize,
    /// Player hands in play order (split hands follow their origin).
    player_hands: Vec<Hand>,
    /// Index of the hand being played.
    current_hand_index: usize,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    betting_open: bool,
    game_over: bool,
    /// Bet for the pending or current round; cleared on settlement.
    initial_bet: usize,
    insurance_bet: usize,
    insurance_offered: bool,
    insurance_resolved: bool,
    insurance_outcome: HandOutcome,
    /// Set once the player hits, stands, doubles or splits this round.
    player_acted: bool,
    last_result: Option<RoundResult>,
}

impl RoundEngine {
    /// Creates a new engine whose shoe is shuffled from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDeckCount`] if the options ask for fewer
    /// than 1 or more than 8 decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, RoundEngine};
    ///
    /// let engine = RoundEngine::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(engine.balance(), 1000);
    /// assert!(engine.is_betting_open());
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, GameError> {
        options.validate()?;

        Ok(Self {
            options,
            shoe: Shoe::new(options.decks, seed),
            balance: options.starting_balance,
            player_hands: Vec::new(),
            current_hand_index: 0,
            dealer_hand: DealerHand::new(),
            betting_open: true,
            game_over: false,
            initial_bet: 0,
            insurance_bet: 0,
            insurance_offered: false,
            insurance_resolved: false,
            insurance_outcome: HandOutcome::Pending,
            player_acted: false,
            last_result: None,
        })
    }

    /// Starts the session over: fresh balance, fresh shoe, no round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDeckCount`] if the deck count is out of range.
    pub fn reset(&mut self, options: GameOptions) -> Result<(), GameError> {
        options.validate()?;

        self.options = options;
        self.shoe.initialize(options.decks);
        self.balance = options.starting_balance;
        self.clear_round();
        self.game_over = false;
        self.last_result = None;
        debug!(
            decks = options.decks,
            dealer_hits_on_soft_17 = options.dealer_hits_on_soft_17,
            balance = self.balance,
            "session reset"
        );

        Ok(())
    }

    /// Changes the table rules between rounds.
    ///
    /// A new deck count takes effect at the next deal, which rebuilds the
    /// shoe. The balance is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDeckCount`] for an out-of-range deck count,
    /// or [`GameError::RoundInProgress`] while hands are in play.
    pub fn configure(&mut self, options: GameOptions) -> Result<(), GameError> {
        options.validate()?;
        if self.round_in_play() {
            return Err(GameError::RoundInProgress);
        }

        self.options = options;
        debug!(
            decks = options.decks,
            dealer_hits_on_soft_17 = options.dealer_hits_on_soft_17,
            "table configured"
        );

        Ok(())
    }

    /// Rebuilds and shuffles the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundInProgress`] while hands are in play.
    pub fn reshuffle(&mut self) -> Result<(), GameError> {
        if self.round_in_play() {
            return Err(GameError::RoundInProgress);
        }

        self.shoe.initialize(self.options.decks);
        debug!(cards = self.shoe.len(), "shoe reshuffled");

        Ok(())
    }

    /// Draws the front card, rebuilding the shoe first if it ran dry.
    fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.shoe.draw() {
                return card;
            }
            warn!(decks = self.options.decks, "shoe exhausted mid-round; rebuilding");
            self.shoe.initialize(self.options.decks);
        }
    }

    /// Whether hands are dealt and the round is not yet settled.
    fn round_in_play(&self) -> bool {
        !self.player_hands.is_empty() && !self.game_over
    }

    /// Clears hands, bets and insurance state and reopens betting.
    fn clear_round(&mut self) {
        self.player_hands.clear();
        self.dealer_hand.clear();
        self.current_hand_index = 0;
        self.initial_bet = 0;
        self.insurance_bet = 0;
        self.insurance_offered = false;
        self.insurance_resolved = false;
        self.insurance_outcome = HandOutcome::Pending;
        self.player_acted = false;
        self.betting_open = true;
    }

    fn current_hand_mut(&mut self) -> Result<&mut Hand, GameError> {
        self.player_hands
            .get_mut(self.current_hand_index)
            .ok_or(GameError::NoActiveHand)
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe for stacking cards in a known order.
    #[must_use]
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn shoe_size(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the configured number of decks.
    #[must_use]
    pub const fn number_of_decks(&self) -> u8 {
        self.options.decks
    }

    /// Returns whether the dealer hits on soft 17.
    #[must_use]
    pub const fn dealer_hits_on_soft_17(&self) -> bool {
        self.options.dealer_hits_on_soft_17
    }

    /// Returns the player's balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the amount currently wagered.
    ///
    /// While hands are in play this is the sum of their bets, doubles and
    /// splits included. Otherwise it is the pending bet, if any.
    #[must_use]
    pub fn current_bet(&self) -> usize {
        if self.round_in_play() {
            self.player_hands.iter().map(Hand::bet).sum()
        } else {
            self.initial_bet
        }
    }

    /// Returns the player's hands in play order.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    /// Returns the index of the hand being played.
    #[must_use]
    pub const fn current_hand_index(&self) -> usize {
        self.current_hand_index
    }

    /// Returns the hand being played, if any.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        if self.game_over {
            return None;
        }
        self.player_hands.get(self.current_hand_index)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns whether a bet may be placed.
    #[must_use]
    pub const fn is_betting_open(&self) -> bool {
        self.betting_open
    }

    /// Returns whether the last round has been settled.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns whether any hand this round was doubled down.
    #[must_use]
    pub fn has_doubled_down(&self) -> bool {
        self.player_hands.iter().any(Hand::has_doubled_down)
    }

    /// Returns the results of the most recently settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the current phase of the round.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.round_in_play() {
            Phase::PlayerTurn
        } else if !self.betting_open {
            Phase::BetPlaced
        } else if self.game_over {
            Phase::RoundOver
        } else {
            Phase::AwaitingBet
        }
    }
}
