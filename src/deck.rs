//! A shuffled, non-repeating source of cards.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A single 52-card deck.
///
/// Every (suit, rank) pair appears exactly once, so no two draws within one
/// game can return equal cards. The deck is permuted once at construction
/// and only ever shrinks.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck shuffled with the given RNG.
    #[must_use]
    pub fn standard(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a stacked deck that yields `draws` in order.
    ///
    /// Intended for tests and simulations where the exact card sequence
    /// matters. Drawing past the end of the list fails as usual.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards: Vec<Card> = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the next card, or `None` if the deck is empty.
    ///
    /// Exhaustion cannot happen in normal play with one dealer and a few
    /// players; callers treat it as a fatal invariant violation.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut deck = Deck::standard(&mut rng);
        assert_eq!(deck.remaining(), DECK_SIZE);

        let mut seen = alloc::vec::Vec::new();
        while let Some(card) = deck.draw() {
            assert!(!seen.contains(&card));
            seen.push(card);
        }
        assert_eq!(seen.len(), DECK_SIZE);
        assert!(deck.draw().is_none());
    }

    #[test]
    fn stacked_deck_draws_in_order() {
        let first = Card::new(Suit::Hearts, 1);
        let second = Card::new(Suit::Spades, 13);
        let mut deck = Deck::from_draws(&[first, second]);

        assert_eq!(deck.draw(), Some(first));
        assert_eq!(deck.draw(), Some(second));
        assert_eq!(deck.draw(), None);
    }
}
