//! The two capabilities the game loop needs from its surroundings.
//!
//! The engine never touches a terminal. The CLI implements these traits over
//! stdin and stdout; tests use the in-memory implementations below.

use std::collections::VecDeque;
use std::io;

/// A source of input lines.
pub trait LineInput {
    /// Read the next line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// A sink for output lines.
pub trait LineOutput {
    /// Write one line of normal output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Write one line reporting a failed command.
    fn write_error(&mut self, line: &str) -> io::Result<()> {
        self.write_line(line)
    }
}

impl LineInput for VecDeque<String> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

impl LineOutput for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
