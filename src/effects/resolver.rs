//! Card resolution - applying a used card to the two tanks.
//!
//! Resolution is a pure function: it takes the acting player's tank, the
//! card, and the opponent's tank, and returns both tanks after the card's
//! effect. Nothing else in the game changes here; hand and pile bookkeeping
//! belong to the turn controller.

use crate::cards::{Card, PowerKind};
use crate::core::Tank;

/// Flat gain granted by a DMT card.
pub const DMT_BONUS: u8 = 10;

/// Most water an SOH card can steal from the opponent.
pub const SOH_STEAL_CAP: u8 = 5;

/// Both tanks after a card resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The acting player's tank.
    pub acting: Tank,
    /// The opponent's tank.
    pub opponent: Tank,
}

/// Resolve `card` played by the owner of `acting` against `opponent`.
///
/// - Water cards add their face value to the acting tank.
/// - DMT adds a flat [`DMT_BONUS`] to the acting tank.
/// - SOH moves up to [`SOH_STEAL_CAP`] units from the opponent's tank
///   into the acting tank; a drier opponent yields only what they hold.
/// - DOT does nothing to either tank.
///
/// Gains clamp at the tank capacity, losses stop at empty.
///
/// # Example
///
/// ```
/// use water_tank::cards::{Card, PowerKind};
/// use water_tank::core::Tank;
/// use water_tank::effects::resolve;
///
/// let result = resolve(Tank::new(75), Card::Water(15), Tank::new(20));
/// assert_eq!(result.acting.level(), 80);
/// assert_eq!(result.opponent.level(), 20);
/// ```
#[must_use]
pub fn resolve(acting: Tank, card: Card, opponent: Tank) -> Resolution {
    match card {
        Card::Water(value) => Resolution {
            acting: acting.gain(value),
            opponent,
        },
        Card::Power(PowerKind::Dot) => Resolution { acting, opponent },
        Card::Power(PowerKind::Dmt) => Resolution {
            acting: acting.gain(DMT_BONUS),
            opponent,
        },
        Card::Power(PowerKind::Soh) => {
            let (opponent, stolen) = opponent.take(SOH_STEAL_CAP);
            Resolution {
                acting: acting.gain(stolen),
                opponent,
            }
        }
    }
}
