//! Hand representation and best-score computation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest score a hand may reach before busting.
pub const BLACKJACK_SCORE: u8 = 21;

/// Extra value granted when an Ace is promoted from 1 to 11.
const ACE_PROMOTION: u8 = 10;

/// An ordered, append-only collection of cards held by one participant.
///
/// The score is never stored; it is recomputed from the card sequence on
/// every read, so it cannot desynchronize from the cards.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the best score of the hand.
    ///
    /// All cards contribute their low value (Ace = 1). If the hand holds at
    /// least one Ace and counting a single Ace as 11 does not bust, that
    /// higher total is returned. At most one Ace is ever promoted, no matter
    /// how many the hand holds; this binary single-adjustment rule is the
    /// engine's defined scoring semantics.
    #[must_use]
    pub fn score(&self) -> u8 {
        let mut low: u8 = 0;
        let mut has_ace = false;

        for card in &self.cards {
            if card.is_ace() {
                has_ace = true;
            }
            low = low.saturating_add(card.base_score());
        }

        if has_ace && low.saturating_add(ACE_PROMOTION) <= BLACKJACK_SCORE {
            low + ACE_PROMOTION
        } else {
            low
        }
    }

    /// Returns whether the hand is soft (an Ace is currently counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        let low: u8 = self
            .cards
            .iter()
            .fold(0, |sum, card| sum.saturating_add(card.base_score()));
        self.cards.iter().any(Card::is_ace) && low.saturating_add(ACE_PROMOTION) <= BLACKJACK_SCORE
    }

    /// Returns whether the hand has busted (score over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK_SCORE
    }

    /// Returns whether the hand is a blackjack (exactly 2 cards scoring 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK_SCORE
    }

    /// Returns whether the hand may take another card (score below 21).
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.score() < BLACKJACK_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn hand_of(ranks: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for (i, &rank) in ranks.iter().enumerate() {
            let suit = Suit::ALL[i % 4];
            hand.add_card(Card::new(suit, rank));
        }
        hand
    }

    #[test]
    fn ace_promotes_when_it_fits() {
        assert_eq!(hand_of(&[1, 9]).score(), 20);
        assert_eq!(hand_of(&[1, 13]).score(), 21);
        assert!(hand_of(&[1, 9]).is_soft());
    }

    #[test]
    fn ace_stays_low_when_promotion_busts() {
        // 1 + 9 + 5 = 15; promoting would be 25.
        let hand = hand_of(&[1, 9, 5]);
        assert_eq!(hand.score(), 15);
        assert!(!hand.is_soft());
    }

    #[test]
    fn only_one_ace_is_ever_promoted() {
        // Two aces: low sum 2, single promotion gives 12 (not 22).
        assert_eq!(hand_of(&[1, 1]).score(), 12);
        // Four aces and a 7: low sum 11, promoted to 21.
        assert_eq!(hand_of(&[1, 1, 1, 1, 7]).score(), 21);
    }

    #[test]
    fn blackjack_requires_exactly_two_cards() {
        assert!(hand_of(&[1, 13]).is_blackjack());
        // 21 in three cards is not a blackjack.
        let hand = hand_of(&[7, 7, 7]);
        assert_eq!(hand.score(), 21);
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn bust_and_hit_eligibility() {
        let bust = hand_of(&[10, 10, 5]);
        assert_eq!(bust.score(), 25);
        assert!(bust.is_bust());
        assert!(!bust.can_hit());

        let twenty_one = hand_of(&[1, 13]);
        assert!(!twenty_one.can_hit());

        let twenty = hand_of(&[10, 10]);
        assert!(twenty.can_hit());
    }

    #[test]
    fn face_cards_score_ten() {
        assert_eq!(hand_of(&[11, 12, 13]).score(), 30);
    }
}
