use tracing::debug;

use crate::error::GameError;
use crate::hand::Hand;
use crate::result::HandOutcome;

use super::RoundEngine;

impl RoundEngine {
    /// Places the bet for the next round and closes betting.
    ///
    /// The amount is taken from the balance when the cards are dealt.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BettingClosed`] if a bet is already pending or a
    /// round is in play, [`GameError::ZeroBet`] for a zero amount, or
    /// [`GameError::InsufficientFunds`] if the amount exceeds the balance.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), GameError> {
        if !self.betting_open {
            return Err(GameError::BettingClosed);
        }
        if amount == 0 {
            return Err(GameError::ZeroBet);
        }
        if amount > self.balance {
            return Err(GameError::InsufficientFunds);
        }

        self.initial_bet = amount;
        self.betting_open = false;
        debug!(amount, balance = self.balance, "bet placed");

        Ok(())
    }

    /// Abandons a stale round so a new bet can be placed.
    ///
    /// Does nothing unless betting is closed with a bet pending. Money already
    /// on the table is not returned. Returns `true` if a round was forfeited.
    pub fn forfeit_round(&mut self) -> bool {
        if self.betting_open || self.initial_bet == 0 {
            return false;
        }

        debug!(
            bet = self.initial_bet,
            hands = self.player_hands.len(),
            "round forfeited"
        );
        self.clear_round();
        self.game_over = true;

        true
    }

    /// Deals two cards each to the player and the dealer.
    ///
    /// The shoe is rebuilt first if the deck count changed or it holds fewer
    /// than the configured threshold. Cards alternate player, dealer, player,
    /// dealer; the dealer's second card is face up and an ace there offers
    /// insurance.
    ///
    /// The hand carries the pending bet, or 0 when none was placed. Betting
    /// closes either way.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundInProgress`] if the previous round is not
    /// settled, or [`GameError::InsufficientFunds`] if the balance no longer
    /// covers the bet.
    pub fn deal_initial_cards(&mut self) -> Result<(), GameError> {
        if self.round_in_play() {
            return Err(GameError::RoundInProgress);
        }
        if self.initial_bet > self.balance {
            return Err(GameError::InsufficientFunds);
        }

        if self
            .shoe
            .needs_reshuffle(self.options.decks, self.options.reshuffle_below)
        {
            self.shoe.initialize(self.options.decks);
            debug!(cards = self.shoe.len(), "shoe rebuilt for new round");
        }

        self.player_hands.clear();
        self.dealer_hand.clear();
        self.current_hand_index = 0;
        self.game_over = false;
        self.insurance_bet = 0;
        self.insurance_resolved = false;
        self.insurance_outcome = HandOutcome::Pending;
        self.player_acted = false;
        self.betting_open = false;

        let mut hand = Hand::new(self.initial_bet);
        for _ in 0..2 {
            let card = self.draw();
            hand.add_card(card);
            let card = self.draw();
            self.dealer_hand.add_card(card);
        }
        hand.set_turn(true);
        let player_value = hand.value();

        self.balance -= self.initial_bet;
        self.player_hands.push(hand);

        self.insurance_offered = self
            .dealer_hand
            .up_card()
            .is_some_and(|c| c.rank.is_ace());

        debug!(
            bet = self.initial_bet,
            balance = self.balance,
            player_value,
            insurance_offered = self.insurance_offered,
            "initial cards dealt"
        );

        Ok(())
    }
}
