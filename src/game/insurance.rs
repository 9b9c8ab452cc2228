use tracing::info;

use crate::error::GameError;
use crate::result::HandOutcome;

use super::RoundEngine;

impl RoundEngine {
    /// Returns whether the dealer's up card was an ace this round.
    #[must_use]
    pub const fn is_insurance_offered(&self) -> bool {
        self.insurance_offered
    }

    /// Returns whether the insurance decision has been made.
    #[must_use]
    pub const fn is_insurance_resolved(&self) -> bool {
        self.insurance_resolved
    }

    /// Returns the insurance side bet for this round.
    #[must_use]
    pub const fn insurance_bet(&self) -> usize {
        self.insurance_bet
    }

    /// Returns how the insurance bet settled.
    #[must_use]
    pub const fn insurance_outcome(&self) -> HandOutcome {
        self.insurance_outcome
    }

    /// Returns whether insurance can still be resolved.
    fn insurance_available(&self) -> bool {
        self.insurance_offered
            && !self.insurance_resolved
            && !self.player_acted
            && !self.game_over
    }

    /// Returns the largest insurance bet currently allowed, or 0 when
    /// insurance is not available.
    #[must_use]
    pub fn max_insurance_bet(&self) -> usize {
        if self.insurance_available() {
            (self.initial_bet / 2).min(self.balance)
        } else {
            0
        }
    }

    /// Settles the insurance side bet.
    ///
    /// The amount is taken from the balance. If the dealer holds blackjack the
    /// bet pays 2:1 (three times the amount comes back) and the round settles
    /// at once; otherwise the bet is lost and play continues. An amount of 0
    /// declines insurance.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InsuranceNotOffered`] unless the dealer shows an
    /// ace, [`GameError::InsuranceAlreadyResolved`] on a second call,
    /// [`GameError::InsuranceAfterAction`] once the player has acted,
    /// [`GameError::InsuranceExceedsLimit`] above half the original bet, or
    /// [`GameError::InsufficientFundsForInsurance`] above the balance.
    pub fn resolve_insurance(&mut self, amount: usize) -> Result<(), GameError> {
        if !self.insurance_offered {
            return Err(GameError::InsuranceNotOffered);
        }
        if self.insurance_resolved {
            return Err(GameError::InsuranceAlreadyResolved);
        }
        if self.player_acted || self.game_over {
            return Err(GameError::InsuranceAfterAction);
        }
        if amount > self.initial_bet / 2 {
            return Err(GameError::InsuranceExceedsLimit);
        }
        if amount > self.balance {
            return Err(GameError::InsufficientFundsForInsurance);
        }

        self.balance -= amount;
        self.insurance_bet = amount;
        self.insurance_resolved = true;

        if self.dealer_hand.is_blackjack() {
            let payout = amount.saturating_mul(3);
            self.balance = self.balance.saturating_add(payout);
            self.insurance_outcome = HandOutcome::Win;
            info!(amount, payout, "insurance won; dealer has blackjack");

            self.dealer_hand.reveal_hole();
            self.resolve_all_hands();
        } else {
            self.insurance_outcome = HandOutcome::Loss;
            info!(amount, "insurance lost; play continues");
        }

        Ok(())
    }
}
