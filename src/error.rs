//! Error types for game operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when validating a player name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// Name is empty or only whitespace.
    #[error("player name must not be empty")]
    Empty,
    /// Name is reserved for the dealer.
    #[error("the name \"Dealer\" is reserved for the dealer")]
    Reserved,
}

/// Errors that can occur when validating a bet amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet is below the table minimum.
    #[error("bet must be at least 1000")]
    BelowMinimum,
    /// Bet is above the table maximum.
    #[error("bet must be at most 100000")]
    AboveMaximum,
}

/// Error returned when a turn command token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized turn command `{0}`, expected `y`/`hit` or `n`/`stand`")]
pub struct ParseActionError(pub String);

/// Errors that can occur when registering a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Invalid game state for joining.
    #[error("players can only join before the deal")]
    InvalidState,
    /// Another player already uses this name.
    #[error("a player with this name already joined")]
    DuplicateName,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No players have joined.
    #[error("no players have joined")]
    NoPlayers,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player's turn is already over.
    #[error("player's turn is already over")]
    TurnOver,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid game state for this phase.
    #[error("invalid game state for this phase")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}
