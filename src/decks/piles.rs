//! The two shared draw piles.
//!
//! A game starts from a fixed multiset of 56 water cards and 18 power
//! cards, each pile shuffled independently. Piles only ever shrink: cards
//! are popped off the top and never returned, and drawing from an empty
//! pile yields `None` rather than an error.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCategory, PowerKind};
use crate::core::GameRng;

/// Water pile composition: (face value, copies). 56 cards total.
pub const WATER_COMPOSITION: [(u8, usize); 7] = [
    (1, 10),
    (2, 10),
    (3, 10),
    (4, 8),
    (5, 8),
    (10, 6),
    (15, 4),
];

/// Power pile composition: (kind, copies). 18 cards total.
pub const POWER_COMPOSITION: [(PowerKind, usize); 3] = [
    (PowerKind::Dot, 8),
    (PowerKind::Soh, 6),
    (PowerKind::Dmt, 4),
];

/// The water and power piles of one game.
///
/// The top of each pile is the back of its vector; draws pop from there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPair {
    water: Vec<Card>,
    power: Vec<Card>,
}

impl DeckPair {
    /// Build both piles with the fixed composition and shuffle each.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut water = Vec::with_capacity(56);
        for (value, copies) in WATER_COMPOSITION {
            for _ in 0..copies {
                water.push(Card::Water(value));
            }
        }

        let mut power = Vec::with_capacity(18);
        for (kind, copies) in POWER_COMPOSITION {
            for _ in 0..copies {
                power.push(Card::Power(kind));
            }
        }

        rng.shuffle(&mut water);
        rng.shuffle(&mut power);

        Self { water, power }
    }

    /// Build a pair with known pile orders, for tests and simulations.
    ///
    /// Draws pop from the back of each vector.
    #[must_use]
    pub fn from_piles(water: Vec<Card>, power: Vec<Card>) -> Self {
        Self { water, power }
    }

    /// Pop the top card of the pile matching `category`.
    ///
    /// Returns `None` when that pile is empty. A normal outcome: the hand
    /// simply does not grow back.
    pub fn draw_replacement(&mut self, category: CardCategory) -> Option<Card> {
        match category {
            CardCategory::Water => self.water.pop(),
            CardCategory::Power => self.power.pop(),
        }
    }

    /// Cards left in the water pile.
    #[must_use]
    pub fn water_remaining(&self) -> usize {
        self.water.len()
    }

    /// Cards left in the power pile.
    #[must_use]
    pub fn power_remaining(&self) -> usize {
        self.power.len()
    }
}
