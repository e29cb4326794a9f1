//! Interactive console front-end.
//!
//! The front-end is a thin shell: it renders the session, collects and
//! validates input, and calls the turn methods. All rules live below it.

pub mod app;
pub mod input;

pub use app::ConsoleGame;
pub use input::{InputSource, ScriptedSource, StdinSource};
