use crate::error::DealError;

use super::{Game, GameState};

/// Cards dealt to every participant before turns begin.
const INITIAL_CARDS: usize = 2;

impl Game {
    /// Deals the initial two cards to every player and the dealer.
    ///
    /// Players receive their cards in registration order, then the dealer
    /// gets an up card followed by a hidden hole card. Afterwards the round
    /// moves to the player-turn phase, skipping any player dealt a 21; if
    /// everyone is skipped the dealer plays immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal already happened, no players have
    /// joined, or the deck cannot cover two cards per participant.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Joining {
            return Err(DealError::InvalidState);
        }

        if self.players.is_empty() {
            return Err(DealError::NoPlayers);
        }

        let cards_needed = (self.players.len() + 1) * INITIAL_CARDS;
        if self.cards_remaining() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        // The availability check above guarantees every draw below succeeds.
        for index in 0..self.players.len() {
            for _ in 0..INITIAL_CARDS {
                if let Some(card) = self.draw() {
                    self.players[index].draw(card);
                }
            }
        }

        for _ in 0..INITIAL_CARDS {
            if let Some(card) = self.draw() {
                self.dealer.draw(card);
            }
        }

        self.cursor = 0;
        self.state = GameState::PlayerTurn;
        self.advance_cursor();

        Ok(())
    }
}
