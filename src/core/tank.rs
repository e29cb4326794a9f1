//! Tank levels and the overflow rule.
//!
//! A tank is a bounded progress counter in `[0, TANK_TARGET]`. Every
//! mutation goes through [`Tank::gain`] or [`Tank::take`], so a level can
//! never leave that range: gains clamp at the target (the "overflow" rule)
//! and removals are bounded by the current level.

use serde::{Deserialize, Serialize};

/// The level at which a tank is full and the game ends.
pub const TANK_TARGET: u8 = 80;

/// A player's water level, clamped to `[0, TANK_TARGET]`.
///
/// `Tank` is a plain value: operations return new tanks rather than
/// mutating, so the same code serves real moves and hypothetical
/// look-ahead.
///
/// ```
/// use water_tank::Tank;
///
/// let tank = Tank::new(75);
/// assert_eq!(tank.gain(10).level(), 80); // clamped at the target
/// assert!(tank.gain(10).is_full());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tank(u8);

impl Tank {
    /// Create a tank at the given level, clamped to the target.
    #[must_use]
    pub const fn new(level: u8) -> Self {
        if level > TANK_TARGET {
            Self(TANK_TARGET)
        } else {
            Self(level)
        }
    }

    /// An empty tank (level 0), the starting state for both players.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Get the current level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Whether the level has reached the target.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 >= TANK_TARGET
    }

    /// Add water, clamping at the target.
    #[must_use]
    pub fn gain(self, amount: u8) -> Self {
        Self::new(self.0.saturating_add(amount))
    }

    /// Remove up to `cap` water.
    ///
    /// Returns the new tank and the amount actually removed, which is
    /// bounded by the current level; a tank never goes negative.
    #[must_use]
    pub fn take(self, cap: u8) -> (Self, u8) {
        let amount = cap.min(self.0);
        (Self(self.0 - amount), amount)
    }
}

impl std::fmt::Display for Tank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
