//! # water-tank
//!
//! A console card game: race the computer to fill an 80-liter water tank.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Card resolution and the computer's decision procedure
//!    are pure functions over tank levels. No I/O below the console layer.
//!
//! 2. **Owned State**: One `GameSession` owns tanks, hands, piles, and the
//!    turn log. No globals, no statics.
//!
//! 3. **Deterministic Replay**: Every shuffle and coin flip comes from a
//!    seeded RNG, so a seed reproduces a whole game.
//!
//! ## Modules
//!
//! - `core`: Seats, tanks, RNG
//! - `cards`: Card values and hands
//! - `decks`: The water and power draw piles
//! - `effects`: Card resolution against the tanks
//! - `policy`: The computer's greedy card choice
//! - `game`: Session state, turns, outcomes
//! - `console`: Interactive front-end

pub mod cards;
pub mod console;
pub mod core;
pub mod decks;
pub mod effects;
pub mod game;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{GameRng, PerSeat, Seat, Tank, TANK_TARGET};

pub use crate::cards::{Card, CardCategory, Hand, PowerKind};

pub use crate::decks::DeckPair;

pub use crate::effects::{resolve, Resolution, DMT_BONUS, SOH_STEAL_CAP};

pub use crate::policy::choose_card;

pub use crate::game::{
    GameOutcome, GameSession, TurnAction, TurnRecord, POWER_CARDS_EACH, WATER_CARDS_EACH,
};

pub use crate::console::{ConsoleGame, InputSource, ScriptedSource, StdinSource};
