//! Line input sources for the console front-end.
//!
//! The game loop reads one line at a time through [`InputSource`], so the
//! same loop runs against a terminal in production and against a fixed
//! script in tests. Sources return the raw line, trailing newline
//! included; callers trim.

use std::collections::VecDeque;
use std::io;

/// One line of input at a time.
pub trait InputSource {
    /// Read the next line, including its trailing newline.
    ///
    /// A closed or exhausted source is an error: the console loop would
    /// otherwise re-prompt forever with nothing left to read.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Reads lines from standard input.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinSource;

impl InputSource for StdinSource {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }
        Ok(line)
    }
}

/// Replays a fixed list of lines, for driving whole games in tests.
///
/// # Example
///
/// ```
/// use water_tank::console::{InputSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(["1", "d"]);
/// assert_eq!(source.read_line().unwrap(), "1\n");
/// assert_eq!(source.read_line().unwrap(), "d\n");
/// assert!(source.read_line().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    /// Build a source that yields `lines` in order, newline appended.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedSource {
    fn read_line(&mut self) -> io::Result<String> {
        self.lines
            .pop_front()
            .map(|line| format!("{}\n", line))
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_lines_come_back_in_order() {
        let mut source = ScriptedSource::new(["first", "second"]);

        assert_eq!(source.remaining(), 2);
        assert_eq!(source.read_line().unwrap(), "first\n");
        assert_eq!(source.read_line().unwrap(), "second\n");
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_exhausted_script_is_an_error() {
        let mut source = ScriptedSource::new(Vec::<String>::new());

        let error = source.read_line().unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_scripted_lines_gain_a_newline() {
        let mut source = ScriptedSource::new(["d"]);
        assert_eq!(source.read_line().unwrap(), "d\n");
    }
}
