//! Dealer and player participants.

extern crate alloc;

use alloc::string::{String, ToString};

use crate::bet::Bet;
use crate::card::Card;
use crate::error::NameError;
use crate::hand::Hand;

/// The reserved dealer name. No player may register under it.
pub const DEALER_NAME: &str = "Dealer";

/// Score at which the dealer stops drawing.
pub const DEALER_STAND_SCORE: u8 = 17;

/// A validated player name: non-empty and distinct from [`DEALER_NAME`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// Creates a player name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty or equals the reserved
    /// dealer name (exact match, case-sensitive).
    pub fn new(name: &str) -> Result<Self, NameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name == DEALER_NAME {
            return Err(NameError::Reserved);
        }
        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a participant may still act this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// May still hit or stand.
    Active,
    /// Chose to stop drawing.
    Stayed,
    /// Went over 21 (terminal).
    Busted,
}

/// Fixed capability set shared by the dealer and every player.
pub trait Participant {
    /// The participant's display name.
    fn name(&self) -> &str;
    /// The participant's hand.
    fn hand(&self) -> &Hand;
}

/// A betting player whose decisions come from outside the engine.
#[derive(Debug, Clone)]
pub struct Player {
    name: PlayerName,
    hand: Hand,
    bet: Bet,
    state: TurnState,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new(name: PlayerName, bet: Bet) -> Self {
        Self {
            name,
            hand: Hand::new(),
            bet,
            state: TurnState::Active,
        }
    }

    /// Returns the player's bet.
    #[must_use]
    pub const fn bet(&self) -> Bet {
        self.bet
    }

    /// Returns the player's turn state.
    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.state
    }

    /// Returns whether the player may take another card.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.state == TurnState::Active && self.hand.can_hit()
    }

    /// Adds a drawn card to the hand, busting the player if it goes over 21.
    pub fn draw(&mut self, card: Card) {
        self.hand.add_card(card);
        if self.hand.is_bust() {
            self.state = TurnState::Busted;
        }
    }

    /// Ends the player's turn by choice.
    pub const fn stand(&mut self) {
        self.state = TurnState::Stayed;
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }
}

/// The dealer: auto-play only, no bet, hole card hidden until its turn.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
    hole_revealed: bool,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the dealer's hand.
    pub fn draw(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the cards a player is allowed to see right now.
    ///
    /// Before the dealer's turn only the up card is visible; afterwards the
    /// full hand is.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            self.hand.cards()
        } else {
            &self.hand.cards()[..self.hand.len().min(1)]
        }
    }

    /// Calculates the visible score (only the up card if the hole is hidden).
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        if self.hole_revealed {
            self.hand.score()
        } else {
            self.up_card().map_or(0, |card| {
                if card.is_ace() {
                    11
                } else {
                    card.base_score()
                }
            })
        }
    }

    /// Returns whether the fixed auto-play rule forces another draw.
    ///
    /// The dealer must hit on any score below 17 and must stop at 17 or
    /// higher. There is no soft-17 exception.
    #[must_use]
    pub fn should_hit(&self) -> bool {
        self.hand.score() < DEALER_STAND_SCORE
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        DEALER_NAME
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }
}
