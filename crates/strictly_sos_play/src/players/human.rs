//! Human player that types coordinates.

use super::Player;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use strictly_sos::Game;
use tracing::{debug, warn};

/// Where a human's typed lines come from.
pub trait LineSource {
    /// Appends the next line to `buf`, returning the bytes read (0 at end of
    /// input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// The process's standard input, locked only for the duration of each read.
///
/// Any number of players can hold one; they share the single buffered stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinLines;

impl LineSource for StdinLines {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// Human player reading `row col` (or `row,col`) lines.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    prompt: W,
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, prompt: W) -> Self {
        Self {
            name: name.into(),
            input,
            prompt,
        }
    }
}

/// Parses `row col`, `row,col` or `row, col`.
pub fn parse_coordinates(line: &str) -> Option<(isize, isize)> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((row, col))
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, game: &Game) -> Result<(isize, isize)> {
        loop {
            write!(
                self.prompt,
                "{}, enter row and column for {}: ",
                self.name,
                game.current_symbol()
            )?;
            self.prompt.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }

            match parse_coordinates(&line) {
                Some(cell) => {
                    debug!(player = %self.name, ?cell, "Human entered move");
                    return Ok(cell);
                }
                None => {
                    warn!(player = %self.name, input = %line.trim(), "Unparsable move");
                    writeln!(self.prompt, "Please enter two numbers, e.g. \"1 2\".")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
