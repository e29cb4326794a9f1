//! Card system: card values and hands.
//!
//! ## Key Types
//!
//! - `Card`: tagged card value, water (numeric) or power (symbolic)
//! - `PowerKind`: the three power cards (DMT, DOT, SOH)
//! - `CardCategory`: which pile a card belongs to
//! - `Hand`: a player's cards in canonical display order

pub mod card;
pub mod hand;

pub use card::{Card, CardCategory, PowerKind};
pub use hand::Hand;
