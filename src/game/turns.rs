extern crate alloc;

use alloc::string::ToString;
use core::str::FromStr;

use crate::card::Card;
use crate::error::{ActionError, ParseActionError};
use crate::participant::{Player, TurnState};

use super::{Game, GameState};

/// A player's turn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Stop drawing and keep the current hand.
    Stand,
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses the two-valued command token set used at the input boundary.
    ///
    /// `y`/`hit` means hit, `n`/`stand` means stand; anything else is an
    /// error for the caller to re-prompt on.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "y" | "hit" => Ok(Self::Hit),
            "n" | "stand" => Ok(Self::Stand),
            other => Err(ParseActionError(other.to_string())),
        }
    }
}

/// Supplies hit/stand decisions for the turn driver.
///
/// The engine calls [`decide`](Self::decide) as a blocking boundary: input
/// collection, validation, and re-prompting all happen on the caller's side
/// before an `Action` comes back.
pub trait ActionDecider {
    /// Decides the next action for the given player.
    fn decide(&mut self, player: &Player) -> Action;
}

impl<F: FnMut(&Player) -> Action> ActionDecider for F {
    fn decide(&mut self, player: &Player) -> Action {
        self(player)
    }
}

impl Game {
    fn ensure_player_turn(&self, index: usize) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        if self.current_index() != Some(index) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Player action: hit (draw a card).
    ///
    /// Busting or reaching 21 ends the player's turn automatically and moves
    /// the cursor on.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the player-turn phase, it is
    /// not this player's turn, the player can no longer hit, or the deck is
    /// exhausted.
    pub fn hit(&mut self, index: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(index)?;

        if !self.players[index].can_hit() {
            return Err(ActionError::TurnOver);
        }

        let card = self.draw().ok_or(ActionError::DeckExhausted)?;
        self.players[index].draw(card);

        if !self.players[index].can_hit() {
            self.advance_cursor();
        }

        Ok(card)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the player-turn phase, it is
    /// not this player's turn, or the player's turn is already over.
    pub fn stand(&mut self, index: usize) -> Result<(), ActionError> {
        self.ensure_player_turn(index)?;

        if self.players[index].state() != TurnState::Active {
            return Err(ActionError::TurnOver);
        }

        self.players[index].stand();
        self.advance_cursor();

        Ok(())
    }

    /// Runs every player's turn in registration order using `decider`.
    ///
    /// Each player is asked for a decision only while they can still hit;
    /// their turn ends on stand, bust, or reaching 21. When the last player
    /// finishes, the round moves to the dealer-turn phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not at the player-turn phase or the
    /// deck runs out mid-turn. A round where every player was dealt 21 has
    /// no player turns and is already at the dealer phase; that case is not
    /// an error.
    pub fn run_player_turns<D: ActionDecider>(&mut self, decider: &mut D) -> Result<(), ActionError> {
        if self.state == GameState::DealerTurn {
            return Ok(());
        }
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        while let Some(index) = self.current_index() {
            match decider.decide(&self.players[index]) {
                Action::Hit => {
                    self.hit(index)?;
                }
                Action::Stand => self.stand(index)?,
            }
        }

        Ok(())
    }
}
