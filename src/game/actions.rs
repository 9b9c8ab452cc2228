use tracing::debug;

use crate::error::GameError;
use crate::hand::Hand;

use super::RoundEngine;

impl RoundEngine {
    /// Closes the current hand and passes the turn on.
    ///
    /// After the last hand the dealer plays and the round is settled.
    fn finish_current_hand(&mut self) {
        if let Some(hand) = self.player_hands.get_mut(self.current_hand_index) {
            hand.stand();
        }

        self.current_hand_index += 1;
        if let Some(next) = self.player_hands.get_mut(self.current_hand_index) {
            next.set_turn(true);
            debug!(hand_index = self.current_hand_index, "next hand to act");
        } else {
            self.dealer_play();
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Does nothing once the round is settled. A hand that goes over 21 is
    /// marked busted and stands automatically.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveHand`] if no cards have been dealt.
    pub fn hit(&mut self) -> Result<(), GameError> {
        if self.game_over {
            debug!("hit ignored; round already settled");
            return Ok(());
        }
        self.current_hand_mut()?;

        self.player_acted = true;
        let card = self.draw();
        let hand_index = self.current_hand_index;
        let hand = self.current_hand_mut()?;
        let value = hand.add_card(card);
        let busted = value > 21;
        if busted {
            hand.mark_busted();
        }
        debug!(hand_index, %card, value, busted, "hit");

        if busted {
            self.finish_current_hand();
        }

        Ok(())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Does nothing once the round is settled.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveHand`] if no cards have been dealt.
    pub fn stand(&mut self) -> Result<(), GameError> {
        if self.game_over {
            debug!("stand ignored; round already settled");
            return Ok(());
        }
        let value = self.current_hand_mut()?.value();

        self.player_acted = true;
        debug!(hand_index = self.current_hand_index, value, "stand");
        self.finish_current_hand();

        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once the round is settled,
    /// [`GameError::NoActiveHand`] if no cards have been dealt,
    /// [`GameError::AlreadyDoubled`] or [`GameError::NotInitialTwoCards`] if
    /// the hand is not eligible, or [`GameError::InsufficientFundsToDouble`] if
    /// the balance cannot cover a second bet.
    pub fn double_down(&mut self) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }

        let balance = self.balance;
        let hand = self.current_hand_mut()?;
        if hand.has_doubled_down() {
            return Err(GameError::AlreadyDoubled);
        }
        if hand.len() != 2 {
            return Err(GameError::NotInitialTwoCards);
        }
        let bet = hand.bet();
        if bet > balance {
            return Err(GameError::InsufficientFundsToDouble);
        }

        self.balance -= bet;
        self.player_acted = true;

        let card = self.draw();
        let hand = self.current_hand_mut()?;
        hand.double_bet();
        let value = hand.add_card(card);
        if value > 21 {
            hand.mark_busted();
        }
        let doubled = hand.bet();
        debug!(
            hand_index = self.current_hand_index,
            %card,
            value,
            bet = doubled,
            "double down"
        );

        self.finish_current_hand();

        Ok(())
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves to a new hand placed right after the current
    /// one, both hands receive one fresh card, and the current hand keeps the
    /// turn.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once the round is settled,
    /// [`GameError::NoActiveHand`] if no cards have been dealt,
    /// [`GameError::NotAPair`] unless the hand is two cards of equal value, or
    /// [`GameError::InsufficientFundsToSplit`] if the balance cannot cover a
    /// second bet.
    pub fn split(&mut self) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }

        let balance = self.balance;
        let hand = self.current_hand_mut()?;
        if !hand.can_split() {
            return Err(GameError::NotAPair);
        }
        let bet = hand.bet();
        if bet > balance {
            return Err(GameError::InsufficientFundsToSplit);
        }
        let Some(split_card) = hand.take_split_card() else {
            return Err(GameError::NotAPair);
        };

        self.balance -= bet;
        self.player_acted = true;

        let first = self.draw();
        let second = self.draw();

        let hand_index = self.current_hand_index;
        self.current_hand_mut()?.add_card(first);
        let mut new_hand = Hand::from_split(split_card, bet);
        new_hand.add_card(second);
        self.player_hands.insert(hand_index + 1, new_hand);

        debug!(
            hand_index,
            hands = self.player_hands.len(),
            balance = self.balance,
            "split"
        );

        Ok(())
    }
}
