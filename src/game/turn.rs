//! Turn actions: using a card, discarding one, and the replacement draw.
//!
//! Either action consumes the whole turn. The spent card leaves the hand,
//! a replacement of the same category is drawn when that pile still has
//! cards, the hand is put back in canonical order, the action is logged,
//! and the turn passes to the opponent. Only using a card touches the
//! tanks.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::Seat;
use crate::effects::resolve;
use crate::game::session::GameSession;

/// What a player did with their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// The card was played for its effect.
    Used(Card),
    /// The card was thrown away unresolved.
    Discarded(Card),
}

impl TurnAction {
    /// The card this action spent.
    #[must_use]
    pub const fn card(self) -> Card {
        match self {
            Self::Used(card) | Self::Discarded(card) => card,
        }
    }
}

/// One entry in the game log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number the action happened on.
    pub turn: u32,
    /// Who acted.
    pub seat: Seat,
    /// What they did.
    pub action: TurnAction,
}

impl GameSession {
    /// Use the card at `index` in `seat`'s hand, resolving its effect.
    ///
    /// Returns the card that was used.
    ///
    /// # Panics
    ///
    /// Panics when it is not `seat`'s turn or `index` is out of bounds.
    pub fn play_card(&mut self, seat: Seat, index: usize) -> Card {
        assert_eq!(seat, self.active, "{} acted out of turn", seat);

        let card = self.hands[seat].remove_at(index);
        let outcome = resolve(self.tanks[seat], card, self.tanks[seat.opponent()]);
        self.tanks[seat] = outcome.acting;
        self.tanks[seat.opponent()] = outcome.opponent;

        self.finish_turn(seat, TurnAction::Used(card));
        card
    }

    /// Throw away the card at `index` in `seat`'s hand without resolving
    /// it. Neither tank changes.
    ///
    /// Returns the discarded card.
    ///
    /// # Panics
    ///
    /// Panics when it is not `seat`'s turn or `index` is out of bounds.
    pub fn discard_card(&mut self, seat: Seat, index: usize) -> Card {
        assert_eq!(seat, self.active, "{} acted out of turn", seat);

        let card = self.hands[seat].remove_at(index);
        self.finish_turn(seat, TurnAction::Discarded(card));
        card
    }

    /// End `seat`'s turn without spending a card.
    ///
    /// Only legal with an empty hand; a card-holding player must use or
    /// discard instead. Passing leaves no log entry.
    ///
    /// # Panics
    ///
    /// Panics when it is not `seat`'s turn or `seat` still holds cards.
    pub fn pass_turn(&mut self, seat: Seat) {
        assert_eq!(seat, self.active, "{} acted out of turn", seat);
        assert!(
            self.hands[seat].is_empty(),
            "{} passed while holding cards",
            seat
        );

        self.turn_number += 1;
        self.active = seat.opponent();
    }

    fn finish_turn(&mut self, seat: Seat, action: TurnAction) {
        if let Some(drawn) = self.decks.draw_replacement(action.card().category()) {
            self.hands[seat].push(drawn);
        }
        self.hands[seat].canonicalize();

        self.history.push_back(TurnRecord {
            turn: self.turn_number,
            seat,
            action,
        });
        self.turn_number += 1;
        self.active = seat.opponent();
    }
}
