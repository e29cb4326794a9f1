//! Hands: the cards a player holds.
//!
//! Hands display and iterate in a canonical order: water cards ascending
//! by value, then power cards ascending by label. Mutators do not sort on
//! their own; the turn controller calls [`Hand::canonicalize`] once per
//! mutation batch, so the order is restored at every turn boundary.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::card::Card;

/// A player's hand.
///
/// Stored inline: a hand holds at most the five dealt cards, since every
/// turn removes one card and draws back at most one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand from the given cards, in canonical order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self {
            cards: cards.into_iter().collect(),
        };
        hand.canonicalize();
        hand
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card at a position, if in range.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Add a card to the back of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the card at `index`.
    ///
    /// Panics if `index` is out of range; callers validate positions first.
    pub fn remove_at(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }

    /// Restore the canonical order: water ascending, then power by label.
    ///
    /// Idempotent; sorting a sorted hand changes nothing.
    pub fn canonicalize(&mut self) {
        self.cards.sort_unstable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::PowerKind;
    use proptest::prelude::*;

    fn sample_hand() -> Hand {
        Hand::from_cards([
            Card::Power(PowerKind::Soh),
            Card::Water(10),
            Card::Power(PowerKind::Dot),
            Card::Water(2),
            Card::Power(PowerKind::Dmt),
        ])
    }

    #[test]
    fn test_from_cards_is_canonical() {
        let hand = sample_hand();
        assert_eq!(
            hand.cards(),
            &[
                Card::Water(2),
                Card::Water(10),
                Card::Power(PowerKind::Dmt),
                Card::Power(PowerKind::Dot),
                Card::Power(PowerKind::Soh),
            ]
        );
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let mut once = sample_hand();
        once.canonicalize();
        let mut twice = once.clone();
        twice.canonicalize();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_push_then_canonicalize() {
        let mut hand = Hand::new();
        hand.push(Card::Water(15));
        hand.push(Card::Water(1));
        assert_eq!(hand.cards(), &[Card::Water(15), Card::Water(1)]);

        hand.canonicalize();
        assert_eq!(hand.cards(), &[Card::Water(1), Card::Water(15)]);
    }

    #[test]
    fn test_remove_at() {
        let mut hand = sample_hand();
        let removed = hand.remove_at(1);
        assert_eq!(removed, Card::Water(10));
        assert_eq!(hand.len(), 4);
    }

    #[test]
    #[should_panic]
    fn test_remove_at_out_of_range_panics() {
        let mut hand = Hand::new();
        hand.remove_at(0);
    }

    #[test]
    fn test_card_at() {
        let hand = sample_hand();
        assert_eq!(hand.card_at(0), Some(Card::Water(2)));
        assert_eq!(hand.card_at(5), None);
    }

    #[test]
    fn test_serialization() {
        let hand = sample_hand();
        let json = serde_json::to_string(&hand).unwrap();
        let deserialized: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, deserialized);
    }

    fn card_strategy() -> impl Strategy<Value = Card> {
        prop_oneof![
            prop::sample::select(vec![1u8, 2, 3, 4, 5, 10, 15]).prop_map(Card::Water),
            prop::sample::select(vec![PowerKind::Dmt, PowerKind::Dot, PowerKind::Soh])
                .prop_map(Card::Power),
        ]
    }

    proptest! {
        #[test]
        fn prop_canonical_order_partitions_categories(
            cards in prop::collection::vec(card_strategy(), 0..8)
        ) {
            let hand = Hand::from_cards(cards);

            // Once a power card appears, no water card may follow.
            let mut seen_power = false;
            for card in hand.cards() {
                match card {
                    Card::Power(_) => seen_power = true,
                    Card::Water(_) => prop_assert!(!seen_power),
                }
            }

            // And each category is internally non-decreasing.
            for pair in hand.cards().windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }

        #[test]
        fn prop_canonicalize_idempotent(
            cards in prop::collection::vec(card_strategy(), 0..8)
        ) {
            let mut hand = Hand::from_cards(cards);
            let once = hand.clone();
            hand.canonicalize();
            prop_assert_eq!(once, hand);
        }
    }
}
