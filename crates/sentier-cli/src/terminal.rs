//! Stdin and stdout as the game's line source and sink.

use std::io::{self, BufRead, Stdin, StdinLock, Write};

use colored::Colorize;
use sentier_engine::{LineInput, LineOutput};

/// Reads lines from stdin, printing a prompt first.
pub struct TerminalInput {
    reader: StdinLock<'static>,
    prompt: &'static str,
}

impl TerminalInput {
    /// Lock stdin for the lifetime of the game.
    pub fn new(stdin: Stdin) -> Self {
        Self {
            reader: stdin.lock(),
            prompt: "> ",
        }
    }

    /// Ask a question and read the answer, trimmed.
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        print!("{question}");
        io::stdout().flush()?;
        Ok(self.read_raw()?.map(|line| line.trim().to_string()))
    }

    fn read_raw(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

impl LineInput for TerminalInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        print!("{}", self.prompt);
        io::stdout().flush()?;
        self.read_raw()
    }
}

/// Writes game output to stdout, with failures in yellow.
pub struct TerminalOutput;

impl LineOutput for TerminalOutput {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")
    }

    fn write_error(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line.yellow())
    }
}
