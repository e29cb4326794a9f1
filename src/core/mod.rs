//! Core primitives: seats, tanks, deterministic RNG.
//!
//! The value types the rest of the crate builds on. None of them know
//! about decks, hands, or turns.

pub mod player;
pub mod rng;
pub mod tank;

pub use player::{PerSeat, Seat};
pub use rng::GameRng;
pub use tank::{Tank, TANK_TARGET};
