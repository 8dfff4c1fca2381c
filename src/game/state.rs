//! Game state types.

/// Phase of the round.
///
/// A round moves through the phases strictly in order; every engine
/// operation checks the phase and fails with its error's `InvalidState`
/// variant when called out of turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Players are registering with their names and bets.
    Joining,
    /// Waiting for player hit/stand decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and bets can be settled.
    RoundOver,
}
