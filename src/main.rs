use std::io;
use std::process;

use water_tank::{ConsoleGame, GameSession, StdinSource};

fn main() {
    let session = GameSession::new(rand::random());
    let stdout = io::stdout();
    let mut game = ConsoleGame::new(session, StdinSource, stdout.lock());

    if let Err(error) = game.run() {
        eprintln!("water-tank: {}", error);
        process::exit(1);
    }
}
