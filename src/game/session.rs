//! Game session state and setup.
//!
//! A [`GameSession`] owns everything one game needs: both tanks, both
//! hands, the two draw piles, whose turn it is, and a persistent log of
//! every card action taken. Setup is fully determined by the seed: the
//! piles shuffle, three water and two power cards are dealt to each side
//! alternating human first, and a coin flip picks the opening seat.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCategory, Hand};
use crate::core::{GameRng, PerSeat, Seat, Tank};
use crate::decks::DeckPair;
use crate::game::turn::TurnRecord;

/// Water cards dealt to each player at setup.
pub const WATER_CARDS_EACH: usize = 3;

/// Power cards dealt to each player at setup.
pub const POWER_CARDS_EACH: usize = 2;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// One tank reached the target first.
    Winner(Seat),
    /// Both tanks reached the target on the same resolution.
    Draw,
}

impl GameOutcome {
    /// Read the outcome off the tanks, or `None` while the game is live.
    ///
    /// A simultaneous fill is a draw; it outranks either single winner.
    #[must_use]
    pub fn evaluate(tanks: &PerSeat<Tank>) -> Option<Self> {
        let human = tanks[Seat::Human].is_full();
        let computer = tanks[Seat::Computer].is_full();

        match (human, computer) {
            (true, true) => Some(Self::Draw),
            (true, false) => Some(Self::Winner(Seat::Human)),
            (false, true) => Some(Self::Winner(Seat::Computer)),
            (false, false) => None,
        }
    }
}

/// Full state of one game.
///
/// Fields are public so front-ends and tests can inspect (or stage) any
/// position; the turn methods on this type keep the state consistent when
/// cards are actually played.
///
/// # Example
///
/// ```
/// use water_tank::game::GameSession;
///
/// let session = GameSession::new(42);
/// assert_eq!(session.hands.iter().map(|(_, hand)| hand.len()).sum::<usize>(), 10);
/// assert!(session.outcome().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    /// Both players' tanks, empty at setup.
    pub tanks: PerSeat<Tank>,
    /// Both players' hands, dealt and kept in canonical order.
    pub hands: PerSeat<Hand>,
    /// The shared water and power piles.
    pub decks: DeckPair,
    /// Whose turn it is.
    pub active: Seat,
    /// Turn counter, starting at 1.
    pub turn_number: u32,
    /// Every card action taken so far, oldest first.
    pub history: Vector<TurnRecord>,
    /// Seeded generator for the shuffle and the opening coin flip.
    pub rng: GameRng,
}

impl GameSession {
    /// Start a new game: shuffle, deal, and flip for the opening seat.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::build(seed, None)
    }

    /// Start a new game with a fixed opening seat.
    ///
    /// Consumes the seed exactly as [`GameSession::new`] does up through
    /// the deal, so the piles and hands match a coin-flipped game on the
    /// same seed.
    #[must_use]
    pub fn with_first_seat(seed: u64, first: Seat) -> Self {
        Self::build(seed, Some(first))
    }

    fn build(seed: u64, first: Option<Seat>) -> Self {
        let mut rng = GameRng::new(seed);
        let mut decks = DeckPair::shuffled(&mut rng);

        let mut hands = PerSeat::new(Hand::new(), Hand::new());
        deal_hands(&mut decks, &mut hands);

        let active = match first {
            Some(seat) => seat,
            None => {
                if rng.gen_bool(0.5) {
                    Seat::Human
                } else {
                    Seat::Computer
                }
            }
        };

        Self {
            tanks: PerSeat::new(Tank::empty(), Tank::empty()),
            hands,
            decks,
            active,
            turn_number: 1,
            history: Vector::new(),
            rng,
        }
    }

    /// The game's outcome, or `None` while both tanks are short of the
    /// target.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::evaluate(&self.tanks)
    }
}

/// Deal the opening hands: water rounds then power rounds, one card per
/// seat per round, human first. Hands come out in canonical order.
fn deal_hands(decks: &mut DeckPair, hands: &mut PerSeat<Hand>) {
    for _ in 0..WATER_CARDS_EACH {
        for seat in Seat::ALL {
            if let Some(card) = decks.draw_replacement(CardCategory::Water) {
                hands[seat].push(card);
            }
        }
    }
    for _ in 0..POWER_CARDS_EACH {
        for seat in Seat::ALL {
            if let Some(card) = decks.draw_replacement(CardCategory::Power) {
                hands[seat].push(card);
            }
        }
    }
    for seat in Seat::ALL {
        hands[seat].canonicalize();
    }
}
