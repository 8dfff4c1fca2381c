//! Game engine and round flow.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bet::Bet;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::JoinError;
use crate::options::GameOptions;
use crate::participant::{Dealer, Participant, Player, PlayerName};

mod deal;
mod settle;
pub mod state;
mod turns;

pub use state::GameState;
pub use turns::{Action, ActionDecider};

/// A single-round blackjack engine for one dealer and any number of players.
///
/// The game owns the deck, the player roster, and the dealer. Use
/// [`GameOptions`] to configure the payout rules. A `Game` plays exactly one
/// round: register players, [`deal`](Game::deal), run the turns, then
/// [`settle`](Game::settle).
pub struct Game {
    /// Cards remaining in the deck.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current phase of the round.
    state: GameState,
    /// Players, in registration order.
    players: Vec<Player>,
    /// The dealer.
    dealer: Dealer,
    /// Index of the player whose turn it is.
    cursor: usize,
}

impl Game {
    /// Creates a new game with a fresh deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), bjround::DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::standard(&mut rng);

        Self {
            deck,
            options,
            state: GameState::Joining,
            players: Vec::new(),
            dealer: Dealer::new(),
            cursor: 0,
        }
    }

    /// Registers a player with a validated name and bet.
    ///
    /// Returns the player's registration index; turns and results follow
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal has already happened or another player
    /// already registered under the same name.
    pub fn join(&mut self, name: PlayerName, bet: Bet) -> Result<usize, JoinError> {
        if self.state != GameState::Joining {
            return Err(JoinError::InvalidState);
        }

        if self
            .players
            .iter()
            .any(|player| player.name() == name.as_str())
        {
            return Err(JoinError::DuplicateName);
        }

        self.players.push(Player::new(name, bet));
        Ok(self.players.len() - 1)
    }

    /// Replaces the deck with a prepared one.
    ///
    /// Intended for tests and simulations that need a known card order; see
    /// [`Deck::from_draws`].
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the players in registration order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the registration index of the player whose turn it is.
    ///
    /// Returns `None` outside the player-turn phase or once every player has
    /// finished.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        if self.state == GameState::PlayerTurn && self.cursor < self.players.len() {
            Some(self.cursor)
        } else {
            None
        }
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_index().map(|index| &self.players[index])
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.draw()
    }

    /// Moves the cursor to the next player who can still act, handing the
    /// turn to the dealer once every player is done.
    fn advance_cursor(&mut self) {
        while self.cursor < self.players.len() && !self.players[self.cursor].can_hit() {
            self.cursor += 1;
        }

        if self.cursor >= self.players.len() {
            self.state = GameState::DealerTurn;
        }
    }
}
