//! Greedy one-ply card selection for the computer player.
//!
//! The computer simulates every card in its hand and keeps the first one
//! whose outcome strictly beats the best seen so far. Outcomes compare
//! by its own resulting level (higher wins), then the opponent's
//! resulting level (lower wins), then card category (power beats water),
//! then a fixed per-card weight. A later card must win outright to
//! displace an earlier one, so ties resolve toward the front of the hand.

use std::cmp::Reverse;

use crate::cards::{Card, CardCategory, Hand, PowerKind};
use crate::core::Tank;
use crate::effects::resolve;

/// Simulated outcome of one card, ordered best-last.
///
/// Field order is the comparison order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Score {
    own: u8,
    opponent: Reverse<u8>,
    power: bool,
    weight: u8,
}

impl Score {
    fn of(card: Card, own: Tank, opponent: Tank) -> Self {
        let outcome = resolve(own, card, opponent);
        Self {
            own: outcome.acting.level(),
            opponent: Reverse(outcome.opponent.level()),
            power: card.category() == CardCategory::Power,
            weight: tie_weight(card),
        }
    }
}

/// Last-resort tiebreak weight. Water cards weigh their face value;
/// power cards weigh DMT over SOH over DOT. Only compared between cards
/// of the same category.
const fn tie_weight(card: Card) -> u8 {
    match card {
        Card::Water(value) => value,
        Card::Power(PowerKind::Dmt) => 3,
        Card::Power(PowerKind::Soh) => 2,
        Card::Power(PowerKind::Dot) => 1,
    }
}

/// Pick the index of the card the computer should use, or `None` when the
/// hand is empty.
///
/// # Example
///
/// ```
/// use water_tank::cards::{Card, Hand};
/// use water_tank::core::Tank;
/// use water_tank::policy::choose_card;
///
/// let hand = Hand::from_cards([Card::Water(3), Card::Water(15)]);
/// let choice = choose_card(&hand, Tank::new(10), Tank::new(10));
/// assert_eq!(choice, Some(1));
/// ```
#[must_use]
pub fn choose_card(hand: &Hand, own: Tank, opponent: Tank) -> Option<usize> {
    let mut best: Option<(usize, Score)> = None;

    for (index, &card) in hand.cards().iter().enumerate() {
        let score = Score::of(card, own, opponent);
        if best.map_or(true, |(_, incumbent)| score > incumbent) {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_hand_has_no_choice() {
        let hand = Hand::new();
        assert_eq!(choose_card(&hand, Tank::new(10), Tank::new(10)), None);
    }

    #[test]
    fn test_highest_gain_wins() {
        let hand = Hand::from_cards([Card::Water(3), Card::Power(PowerKind::Dot)]);
        let choice = choose_card(&hand, Tank::new(70), Tank::new(50));
        assert_eq!(choice, Some(0), "a small gain still beats no gain");
    }

    #[test]
    fn test_soh_wins_when_draining_matters() {
        let hand = Hand::from_cards([Card::Water(3), Card::Power(PowerKind::Soh)]);
        let choice = choose_card(&hand, Tank::new(40), Tank::new(50));
        assert_eq!(choice, Some(1));
    }

    #[test]
    fn test_power_breaks_equal_outcomes() {
        // At 75 both DMT and the 15 clamp to a full tank; the power card
        // is preferred even though the levels come out identical.
        let hand = Hand::from_cards([Card::Water(15), Card::Power(PowerKind::Dmt)]);
        let choice = choose_card(&hand, Tank::new(75), Tank::new(30));
        assert_eq!(choice, Some(1));
    }

    #[test]
    fn test_full_tank_prefers_dot_over_water() {
        // Once the tank is full every card simulates to the same levels,
        // so the category tiebreak picks a power card, even a dead DOT.
        let hand = Hand::from_cards([Card::Water(3), Card::Power(PowerKind::Dot)]);
        let choice = choose_card(&hand, Tank::new(80), Tank::new(30));
        assert_eq!(choice, Some(1));
    }

    #[test]
    fn test_soh_over_dot_against_an_empty_opponent() {
        // Nothing to steal, so both cards change nothing; the weight
        // tiebreak ranks SOH above DOT.
        let hand = Hand::from_cards([
            Card::Power(PowerKind::Dot),
            Card::Power(PowerKind::Soh),
        ]);
        let choice = choose_card(&hand, Tank::new(20), Tank::new(0));
        assert_eq!(choice, Some(1));
    }

    #[test]
    fn test_first_of_equal_cards_wins() {
        let hand = Hand::from_cards([Card::Water(5), Card::Water(5), Card::Water(5)]);
        let choice = choose_card(&hand, Tank::new(10), Tank::new(10));
        assert_eq!(choice, Some(0));
    }

    fn any_card() -> impl Strategy<Value = Card> {
        prop::sample::select(vec![
            Card::Water(1),
            Card::Water(2),
            Card::Water(3),
            Card::Water(4),
            Card::Water(5),
            Card::Water(10),
            Card::Water(15),
            Card::Power(PowerKind::Dmt),
            Card::Power(PowerKind::Dot),
            Card::Power(PowerKind::Soh),
        ])
    }

    proptest! {
        #[test]
        fn prop_choice_is_in_bounds(
            cards in prop::collection::vec(any_card(), 0..=7),
            own in 0u8..=80,
            opponent in 0u8..=80,
        ) {
            let hand = Hand::from_cards(cards);
            let choice = choose_card(&hand, Tank::new(own), Tank::new(opponent));
            match choice {
                Some(index) => prop_assert!(index < hand.len()),
                None => prop_assert!(hand.is_empty()),
            }
        }

        #[test]
        fn prop_choice_maximizes_own_level(
            cards in prop::collection::vec(any_card(), 1..=7),
            own in 0u8..=80,
            opponent in 0u8..=80,
        ) {
            let hand = Hand::from_cards(cards);
            let own = Tank::new(own);
            let opponent = Tank::new(opponent);

            let index = choose_card(&hand, own, opponent).unwrap();
            let chosen = resolve(own, hand.cards()[index], opponent).acting.level();

            for &card in hand.cards() {
                let level = resolve(own, card, opponent).acting.level();
                prop_assert!(chosen >= level);
            }
        }
    }
}
