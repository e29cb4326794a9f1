//! Seats and per-seat data storage.
//!
//! ## Seat
//!
//! Exactly two parties play: the human and the computer. `Seat` identifies
//! the acting party and displays with the narration names
//! ("Human player" / "Computer player").
//!
//! ## PerSeat
//!
//! Two-slot storage indexable by `Seat`, used for the tank pair and the
//! hand pair.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two parties in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    /// Both seats, in deal order (the human is dealt to first).
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Computer];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }

    /// Slot index for this seat (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "Human player"),
            Seat::Computer => write!(f, "Computer player"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// One slot per seat; index with a `Seat`.
///
/// ## Example
///
/// ```
/// use water_tank::{PerSeat, Seat};
///
/// let mut levels: PerSeat<u8> = PerSeat::new(0, 0);
///
/// levels[Seat::Computer] = 15;
/// assert_eq!(levels[Seat::Human], 0);
/// assert_eq!(levels[Seat::Computer], 15);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerSeat<T> {
    human: T,
    computer: T,
}

impl<T> PerSeat<T> {
    /// Create with explicit values for each seat.
    #[must_use]
    pub const fn new(human: T, computer: T) -> Self {
        Self { human, computer }
    }

    /// Create with values from a factory function.
    pub fn from_fn(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            human: factory(Seat::Human),
            computer: factory(Seat::Computer),
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub const fn get(&self, seat: Seat) -> &T {
        match seat {
            Seat::Human => &self.human,
            Seat::Computer => &self.computer,
        }
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Computer => &mut self.computer,
        }
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().map(move |seat| (seat, self.get(seat)))
    }
}

impl<T> Index<Seat> for PerSeat<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for PerSeat<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_opponent_is_involution() {
        assert_eq!(Seat::Human.opponent(), Seat::Computer);
        assert_eq!(Seat::Computer.opponent(), Seat::Human);
        for seat in Seat::ALL {
            assert_eq!(seat.opponent().opponent(), seat);
        }
    }

    #[test]
    fn test_seat_display_matches_narration() {
        assert_eq!(format!("{}", Seat::Human), "Human player");
        assert_eq!(format!("{}", Seat::Computer), "Computer player");
    }

    #[test]
    fn test_seat_indices() {
        assert_eq!(Seat::Human.index(), 0);
        assert_eq!(Seat::Computer.index(), 1);
    }

    #[test]
    fn test_per_seat_new_and_index() {
        let map = PerSeat::new("you", "them");
        assert_eq!(map[Seat::Human], "you");
        assert_eq!(map[Seat::Computer], "them");
    }

    #[test]
    fn test_per_seat_from_fn() {
        let map = PerSeat::from_fn(|seat| seat.index() * 10);
        assert_eq!(map[Seat::Human], 0);
        assert_eq!(map[Seat::Computer], 10);
    }

    #[test]
    fn test_per_seat_mutation() {
        let mut map: PerSeat<i32> = PerSeat::new(0, 0);
        map[Seat::Human] = 7;
        map[Seat::Computer] = 9;
        assert_eq!(map[Seat::Human], 7);
        assert_eq!(map[Seat::Computer], 9);
    }

    #[test]
    fn test_per_seat_iter_in_seat_order() {
        let map = PerSeat::new(1, 2);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Seat::Human, &1), (Seat::Computer, &2)]);
    }

    #[test]
    fn test_serialization() {
        let map: PerSeat<u8> = PerSeat::new(3, 4);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PerSeat<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);

        let seat_json = serde_json::to_string(&Seat::Computer).unwrap();
        let seat: Seat = serde_json::from_str(&seat_json).unwrap();
        assert_eq!(seat, Seat::Computer);
    }
}
