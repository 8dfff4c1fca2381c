//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Outcome of a single player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    Win,
    /// Player wins with a natural blackjack.
    Blackjack,
    /// Push (tie); the bet is returned with no profit or loss.
    Push,
    /// Player loses (bust or lower score than the dealer).
    Lose,
}

/// Settlement result for a single player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// The player's final hand.
    pub cards: Vec<Card>,
    /// The player's final score.
    pub score: u8,
    /// The outcome against the dealer.
    pub outcome: Outcome,
    /// The amount the player wagered.
    pub bet: u32,
    /// Signed payout: positive = profit, negative = forfeited bet, zero for
    /// pushes and busts.
    pub payout: i64,
}

/// The dealer's aggregate result, the mirror image of the player outcomes.
///
/// Display-only; the dealer has no bet of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DealerSummary {
    /// Hands the dealer beat.
    pub wins: usize,
    /// Hands the dealer lost to.
    pub losses: usize,
    /// Tied hands.
    pub pushes: usize,
    /// Negated sum of all player payouts.
    pub net: i64,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Per-player results, in registration order.
    pub players: Vec<PlayerResult>,
    /// The dealer's aggregate result.
    pub dealer: DealerSummary,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a blackjack.
    pub dealer_blackjack: bool,
}
