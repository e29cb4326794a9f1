//! Game state and turn flow.
//!
//! [`GameSession`] holds a whole game; the methods in [`turn`] advance it
//! one action at a time. The session is front-end agnostic: the console
//! loop in [`crate::console`] and the tests drive it through the same
//! three entry points (play, discard, pass).

pub mod session;
pub mod turn;

pub use session::{GameOutcome, GameSession, POWER_CARDS_EACH, WATER_CARDS_EACH};
pub use turn::{TurnAction, TurnRecord};
