//! Draw piles: fixed compositions and replacement draws.

pub mod piles;

pub use piles::{DeckPair, POWER_COMPOSITION, WATER_COMPOSITION};
