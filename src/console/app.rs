//! The interactive game loop.
//!
//! [`ConsoleGame`] drives a [`GameSession`] from a line [`InputSource`] to
//! any [`Write`] sink, narrating every turn. Input validation re-prompts
//! without consuming the turn; only a well-formed choice reaches the
//! session. The loop owns no game rules of its own.

use std::io::{self, Write};

use crate::console::input::InputSource;
use crate::core::Seat;
use crate::game::{GameOutcome, GameSession};
use crate::policy::choose_card;

/// A game session wired to console input and output.
pub struct ConsoleGame<I, O> {
    session: GameSession,
    input: I,
    output: O,
}

/// Why a hand index string was rejected.
enum IndexError {
    NotANumber,
    OutOfRange,
}

/// Parse a 1-based hand index. Digit-shape is checked before value, so a
/// non-numeric reply and an out-of-range number report differently.
/// Anything too large to parse counts as out of range.
fn parse_index(reply: &str, hand_size: usize) -> Result<usize, IndexError> {
    if reply.is_empty() || !reply.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(IndexError::NotANumber);
    }
    match reply.parse::<usize>() {
        Ok(number) if (1..=hand_size).contains(&number) => Ok(number - 1),
        _ => Err(IndexError::OutOfRange),
    }
}

impl<I: InputSource, O: Write> ConsoleGame<I, O> {
    /// Wire a session to an input source and an output sink.
    pub fn new(session: GameSession, input: I, output: O) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// The session being driven.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Play the game to its end and return the outcome.
    ///
    /// Errors only on a broken input or output stream; invalid entries
    /// re-prompt instead.
    pub fn run(&mut self) -> io::Result<GameOutcome> {
        writeln!(
            self.output,
            "Welcome to the WATER TANK game and play against the computer!\n\
             Fill your tank by using or discarding a card for each turn.\n\
             The first player to fill their tank wins the game. Good luck!"
        )?;
        writeln!(
            self.output,
            "\nThe {} has been selected to go first",
            self.session.active
        )?;

        loop {
            if let Some(outcome) = self.session.outcome() {
                self.game_over(outcome)?;
                return Ok(outcome);
            }

            match self.session.active {
                Seat::Human => self.human_turn()?,
                Seat::Computer => self.computer_turn()?,
            }
        }
    }

    /// One human turn: show the position, then read until a valid use or
    /// discard arrives.
    fn human_turn(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n===== Human player's turn =====")?;
        writeln!(
            self.output,
            "Your water level: {}",
            self.session.tanks[Seat::Human]
        )?;
        writeln!(
            self.output,
            "Computer water level: {}",
            self.session.tanks[Seat::Computer]
        )?;
        writeln!(self.output, "\nYour hand:")?;
        for (number, card) in self.session.hands[Seat::Human].cards().iter().enumerate() {
            writeln!(self.output, "  {}. {}", number + 1, card)?;
        }

        loop {
            write!(
                self.output,
                "\nEnter a card number to USE, or D to DISCARD: "
            )?;
            self.output.flush()?;
            let line = self.input.read_line()?;
            let choice = line.trim().to_lowercase();
            let hand_size = self.session.hands[Seat::Human].len();

            if choice == "d" {
                if self.session.hands[Seat::Human].is_empty() {
                    writeln!(self.output, "You have no cards to discard.")?;
                    continue;
                }
                write!(self.output, "Enter the card number to discard: ")?;
                self.output.flush()?;
                let reply = self.input.read_line()?;

                match parse_index(reply.trim(), hand_size) {
                    Ok(index) => {
                        let card = self.session.discard_card(Seat::Human, index);
                        writeln!(self.output, "You discarded: {}", card)?;
                        self.report_levels()?;
                        return Ok(());
                    }
                    Err(IndexError::NotANumber) => {
                        writeln!(self.output, "Please enter a valid number.")?;
                    }
                    Err(IndexError::OutOfRange) => {
                        writeln!(self.output, "Out of range.")?;
                    }
                }
            } else {
                match parse_index(&choice, hand_size) {
                    Ok(index) => {
                        let card = self.session.play_card(Seat::Human, index);
                        writeln!(self.output, "You used: {}", card)?;
                        self.report_levels()?;
                        return Ok(());
                    }
                    Err(IndexError::NotANumber) => {
                        writeln!(self.output, "Enter a valid number or D.")?;
                    }
                    Err(IndexError::OutOfRange) => {
                        writeln!(self.output, "Out of range.")?;
                    }
                }
            }
        }
    }

    /// One computer turn: pick greedily, or pass on an empty hand.
    fn computer_turn(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n==========Computer Player's turn=====")?;
        self.report_computer_levels()?;

        let choice = choose_card(
            &self.session.hands[Seat::Computer],
            self.session.tanks[Seat::Computer],
            self.session.tanks[Seat::Human],
        );

        match choice {
            Some(index) => {
                let card = self.session.hands[Seat::Computer].cards()[index];
                writeln!(self.output, "Computer playing with card: {}", card)?;
                self.session.play_card(Seat::Computer, index);
                writeln!(
                    self.output,
                    "Computer's water level is now {}",
                    self.session.tanks[Seat::Computer]
                )?;
                writeln!(
                    self.output,
                    "Your water level is now {}",
                    self.session.tanks[Seat::Human]
                )?;
            }
            None => {
                writeln!(self.output, "Computer has no card to play.")?;
                self.session.pass_turn(Seat::Computer);
                self.report_computer_levels()?;
            }
        }
        Ok(())
    }

    fn report_levels(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Updated levels -> You: {} | Computer: {}",
            self.session.tanks[Seat::Human],
            self.session.tanks[Seat::Computer]
        )
    }

    fn report_computer_levels(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Computer's water level is at {}",
            self.session.tanks[Seat::Computer]
        )?;
        writeln!(
            self.output,
            "Your water level is at {}",
            self.session.tanks[Seat::Human]
        )
    }

    fn game_over(&mut self, outcome: GameOutcome) -> io::Result<()> {
        writeln!(self.output, "\n==== Game Over ====")?;
        match outcome {
            GameOutcome::Draw => writeln!(self.output, "It's a tie!")?,
            GameOutcome::Winner(seat) => writeln!(self.output, "{} wins!", seat)?,
        }
        writeln!(
            self.output,
            "Final levels -> Human: {} | Computer: {}",
            self.session.tanks[Seat::Human],
            self.session.tanks[Seat::Computer]
        )
    }
}
