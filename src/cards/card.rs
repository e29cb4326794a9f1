//! Card types.
//!
//! A card is either a water card carrying a face value or a power card
//! carrying a symbolic kind. The derived ordering is the canonical hand
//! order: all water cards ascending by value, then all power cards
//! ascending by label.

use serde::{Deserialize, Serialize};

/// The three power card kinds.
///
/// Variants are declared in label order (DMT < DOT < SOH) so the derived
/// `Ord` sorts power cards the way hands display them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PowerKind {
    /// Adds a flat bonus to the acting tank.
    Dmt,
    /// No effect when played.
    Dot,
    /// Steals water from the opponent, up to the steal cap.
    Soh,
}

impl PowerKind {
    /// The printed label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PowerKind::Dmt => "DMT",
            PowerKind::Dot => "DOT",
            PowerKind::Soh => "SOH",
        }
    }
}

impl std::fmt::Display for PowerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which pile a card belongs to and draws its replacement from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Water,
    Power,
}

/// A playing card: numeric water or symbolic power.
///
/// ```
/// use water_tank::{Card, PowerKind};
///
/// let mut cards = vec![
///     Card::Power(PowerKind::Soh),
///     Card::Water(15),
///     Card::Power(PowerKind::Dmt),
///     Card::Water(2),
/// ];
/// cards.sort();
/// assert_eq!(cards, vec![
///     Card::Water(2),
///     Card::Water(15),
///     Card::Power(PowerKind::Dmt),
///     Card::Power(PowerKind::Soh),
/// ]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Numeric card; face value is added to the acting tank when played.
    Water(u8),
    /// Symbolic card with a special effect.
    Power(PowerKind),
}

impl Card {
    /// The pile category this card draws its replacement from.
    #[must_use]
    pub const fn category(self) -> CardCategory {
        match self {
            Card::Water(_) => CardCategory::Water,
            Card::Power(_) => CardCategory::Power,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Water(value) => write!(f, "{}", value),
            Card::Power(kind) => write!(f, "{}", kind),
        }
    }
}
