//! Validated wager amounts and payout arithmetic.

use crate::error::BetError;
use crate::options::RoundingMode;

/// Minimum bet a player may place.
pub const MIN_BET: u32 = 1_000;
/// Maximum bet a player may place.
pub const MAX_BET: u32 = 100_000;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => amount.ceil() as i64,
        RoundingMode::Down => amount.floor() as i64,
        RoundingMode::Nearest => amount.round() as i64,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as i64,
        RoundingMode::Down => libm::floor(amount) as i64,
        RoundingMode::Nearest => libm::round(amount) as i64,
    }
}

/// A validated wager, bound to one player for the round.
///
/// The amount is immutable once created; settlement multiplies it into a
/// signed payout without ever mutating the bet itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bet {
    amount: u32,
}

impl Bet {
    /// Creates a bet, validating the amount against the table limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is below [`MIN_BET`] or above
    /// [`MAX_BET`].
    pub const fn new(amount: u32) -> Result<Self, BetError> {
        if amount < MIN_BET {
            return Err(BetError::BelowMinimum);
        }
        if amount > MAX_BET {
            return Err(BetError::AboveMaximum);
        }
        Ok(Self { amount })
    }

    /// Returns the bet amount.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Calculates the signed payout for this bet at the given multiplier.
    ///
    /// Only a fractional multiplier (the 1.5 blackjack payout) can produce a
    /// non-integral product; `rounding` decides how it is settled.
    #[must_use]
    pub fn payout(&self, multiplier: f64, rounding: RoundingMode) -> i64 {
        let amount = f64::from(self.amount) * multiplier;
        round_amount(amount, rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_amounts() {
        assert_eq!(Bet::new(999).unwrap_err(), BetError::BelowMinimum);
        assert_eq!(Bet::new(0).unwrap_err(), BetError::BelowMinimum);
        assert_eq!(Bet::new(100_001).unwrap_err(), BetError::AboveMaximum);
    }

    #[test]
    fn accepts_boundary_amounts() {
        assert_eq!(Bet::new(1_000).unwrap().amount(), 1_000);
        assert_eq!(Bet::new(100_000).unwrap().amount(), 100_000);
    }

    #[test]
    fn payout_applies_multiplier_and_sign() {
        let bet = Bet::new(10_000).unwrap();
        assert_eq!(bet.payout(1.0, RoundingMode::Down), 10_000);
        assert_eq!(bet.payout(-1.0, RoundingMode::Down), -10_000);
        assert_eq!(bet.payout(0.0, RoundingMode::Down), 0);
        assert_eq!(bet.payout(1.5, RoundingMode::Down), 15_000);
    }

    #[test]
    fn fractional_payout_respects_rounding_mode() {
        let bet = Bet::new(1_001).unwrap();
        assert_eq!(bet.payout(1.5, RoundingMode::Down), 1_501);
        assert_eq!(bet.payout(1.5, RoundingMode::Up), 1_502);
        assert_eq!(bet.payout(1.5, RoundingMode::Nearest), 1_502);
    }
}
