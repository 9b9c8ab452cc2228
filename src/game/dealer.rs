use alloc::vec::Vec;

use tracing::{debug, info};

use crate::hand::Hand;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::RoundEngine;

impl RoundEngine {
    /// Dealer plays their hand according to the table rules, then settles.
    ///
    /// The hole card is revealed. If every player hand busted the dealer
    /// draws nothing; otherwise the dealer draws below 17, and also on a soft
    /// 17 when `dealer_hits_on_soft_17` is set.
    pub(super) fn dealer_play(&mut self) {
        self.dealer_hand.reveal_hole();

        if self.player_hands.iter().all(Hand::is_busted) {
            debug!("all hands busted; dealer stands pat");
        } else {
            loop {
                let value = self.dealer_hand.value();
                let hits_soft_17 =
                    self.options.dealer_hits_on_soft_17 && self.dealer_hand.is_soft_17();
                if value >= 17 && !hits_soft_17 {
                    break;
                }

                let card = self.draw();
                self.dealer_hand.add_card(card);
                debug!(%card, value = self.dealer_hand.value(), "dealer draws");
            }
        }

        self.resolve_all_hands();
    }

    /// Compares every hand with the dealer, pays out and closes the round.
    pub(super) fn resolve_all_hands(&mut self) {
        let dealer_value = self.dealer_hand.value();
        let dealer_bust = self.dealer_hand.is_bust();
        let dealer_blackjack = self.dealer_hand.is_blackjack();

        let mut hand_results = Vec::with_capacity(self.player_hands.len());
        let mut total_payout: usize = 0;
        let mut total_bet: usize = 0;

        for (hand_index, hand) in self.player_hands.iter_mut().enumerate() {
            let bet = hand.bet();
            let player_value = hand.value();

            let (outcome, payout) = if hand.is_busted() || player_value > 21 {
                (HandOutcome::Loss, 0)
            } else if dealer_bust || player_value > dealer_value {
                (HandOutcome::Win, bet.saturating_mul(2))
            } else if player_value == dealer_value {
                (HandOutcome::Tie, bet)
            } else {
                (HandOutcome::Loss, 0)
            };

            hand.set_outcome(outcome);
            hand.set_turn(false);
            total_payout = total_payout.saturating_add(payout);
            total_bet = total_bet.saturating_add(bet);

            hand_results.push(HandResult {
                hand_index,
                outcome,
                bet,
                payout,
                player_value,
                dealer_value,
            });
        }

        self.balance = self.balance.saturating_add(total_payout);

        let insurance_payout = if self.insurance_outcome == HandOutcome::Win {
            self.insurance_bet.saturating_mul(3)
        } else {
            0
        };

        let returned = total_payout.saturating_add(insurance_payout);
        let staked = total_bet.saturating_add(self.insurance_bet);
        let net = if returned >= staked {
            isize::try_from(returned - staked).unwrap_or(isize::MAX)
        } else {
            isize::try_from(staked - returned).map_or(isize::MIN, |loss| -loss)
        };

        self.game_over = true;
        self.initial_bet = 0;
        self.betting_open = true;

        info!(
            dealer_value,
            dealer_bust,
            hands = hand_results.len(),
            net,
            balance = self.balance,
            "round settled"
        );

        self.last_result = Some(RoundResult {
            hands: hand_results,
            dealer_value,
            dealer_bust,
            dealer_blackjack,
            insurance_bet: self.insurance_bet,
            insurance_payout,
            net,
        });
    }
}
