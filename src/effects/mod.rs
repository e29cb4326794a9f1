//! Card effects and their resolution against the tanks.
//!
//! Every card maps to a fixed, deterministic effect:
//! - Water cards pour their face value into the acting tank.
//! - `DMT` pours a flat bonus into the acting tank.
//! - `SOH` siphons water from the opponent into the acting tank.
//! - `DOT` resolves to nothing at all.
//!
//! Resolution never touches hands or piles; it maps two tank levels to
//! two tank levels.

mod resolver;

pub use resolver::{resolve, Resolution, DMT_BONUS, SOH_STEAL_CAP};
