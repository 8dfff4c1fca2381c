//! A single-round blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages one full round for a
//! dealer and any number of named players: registration with validated
//! names and bets, the initial deal, player turns, dealer auto-play, and
//! settlement of every bet against the dealer's hand.
//!
//! Input parsing and rendering are the caller's job: the engine consumes
//! already-validated [`PlayerName`]s, [`Bet`]s, and [`Action`]s, and emits
//! a [`RoundResult`] for display.
//!
//! # Example
//!
//! ```
//! use bjround::{Bet, Game, GameOptions, PlayerName};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let name = PlayerName::new("anna").unwrap();
//! let bet = Bet::new(10_000).unwrap();
//! game.join(name, bet).unwrap();
//! game.deal().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bet;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;

// Re-export main types
pub use bet::{Bet, MAX_BET, MIN_BET};
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, JoinError, NameError, ParseActionError, SettleError,
};
pub use game::{Action, ActionDecider, Game, GameState};
pub use hand::Hand;
pub use options::{GameOptions, RoundingMode};
pub use participant::{DEALER_NAME, Dealer, Participant, Player, PlayerName, TurnState};
pub use result::{DealerSummary, Outcome, PlayerResult, RoundResult};
