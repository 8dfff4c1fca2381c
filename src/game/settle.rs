use alloc::string::ToString;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::SettleError;
use crate::participant::Participant;
use crate::result::{DealerSummary, Outcome, PlayerResult, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand under the fixed auto-play rule.
    ///
    /// The dealer reveals the hole card, then draws while their score is
    /// below 17 and stops at 17 or higher (or on busting). The dealer plays
    /// even when every player has busted, matching the table ritual.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer-turn phase or the
    /// deck is exhausted while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, SettleError> {
        if self.state != GameState::DealerTurn {
            return Err(SettleError::InvalidState);
        }

        self.dealer.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer.should_hit() {
            let card = self.draw().ok_or(SettleError::DeckExhausted)?;
            self.dealer.draw(card);
            drawn_cards.push(card);
        }

        self.state = GameState::RoundOver;

        Ok(drawn_cards)
    }

    /// Settles every bet against the dealer's hand.
    ///
    /// Outcome precedence, per player:
    ///
    /// 1. player bust: lose, payout 0 (the bet was already forfeited);
    /// 2. dealer bust: win at even money;
    /// 3. player blackjack against a non-blackjack dealer: win at the
    ///    blackjack multiplier;
    /// 4. both blackjack: push;
    /// 5. otherwise the higher score wins at even money, equal scores push,
    ///    a lower score forfeits the bet.
    ///
    /// The dealer summary is the mirror image of the player outcomes and
    /// exists for display only.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished playing.
    pub fn settle(&self) -> Result<RoundResult, SettleError> {
        if self.state != GameState::RoundOver {
            return Err(SettleError::InvalidState);
        }

        let dealer_score = self.dealer.hand().score();
        let dealer_bust = self.dealer.hand().is_bust();
        let dealer_blackjack = self.dealer.hand().is_blackjack();

        let mut players = Vec::with_capacity(self.players.len());
        let mut summary = DealerSummary::default();

        for player in &self.players {
            let hand = player.hand();
            let score = hand.score();

            let (outcome, multiplier) = if hand.is_bust() {
                (Outcome::Lose, 0.0)
            } else if dealer_bust {
                (Outcome::Win, 1.0)
            } else if hand.is_blackjack() && !dealer_blackjack {
                (Outcome::Blackjack, self.options.blackjack_pays)
            } else if hand.is_blackjack() && dealer_blackjack {
                (Outcome::Push, 0.0)
            } else {
                match score.cmp(&dealer_score) {
                    core::cmp::Ordering::Greater => (Outcome::Win, 1.0),
                    core::cmp::Ordering::Equal => (Outcome::Push, 0.0),
                    core::cmp::Ordering::Less => (Outcome::Lose, -1.0),
                }
            };

            let payout = player.bet().payout(multiplier, self.options.rounding);

            match outcome {
                Outcome::Win | Outcome::Blackjack => summary.losses += 1,
                Outcome::Lose => summary.wins += 1,
                Outcome::Push => summary.pushes += 1,
            }
            summary.net -= payout;

            players.push(PlayerResult {
                name: player.name().to_string(),
                cards: hand.cards().to_vec(),
                score,
                outcome,
                bet: player.bet().amount(),
                payout,
            });
        }

        Ok(RoundResult {
            players,
            dealer: summary,
            dealer_score,
            dealer_bust,
            dealer_blackjack,
        })
    }
}
