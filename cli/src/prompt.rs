use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::bail;
use memora_core::{BoardSize, Coord, Coord2, parse_coordinate};

/// Line-based question and answer over any reader/writer pair.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl Display) -> anyhow::Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints `prompt` and returns the next line with surrounding whitespace removed.
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed while waiting for an answer");
        }
        log::trace!("answer: {:?}", line);
        Ok(line.trim().to_string())
    }

    pub fn ask_size(&mut self) -> anyhow::Result<BoardSize> {
        loop {
            let answer = self.ask("Enter an even number for game size (between 4 - 10): ")?;
            let size = answer
                .parse::<Coord>()
                .ok()
                .and_then(|size| BoardSize::new(size).ok());
            if let Some(size) = size {
                return Ok(size);
            }
        }
    }

    pub fn ask_player_count(&mut self) -> anyhow::Result<usize> {
        loop {
            if let Ok(count) = self.ask("Enter the number of players: ")?.parse() {
                return Ok(count);
            }
        }
    }

    pub fn ask_names(&mut self, count: usize) -> anyhow::Result<Vec<String>> {
        if count > 0 {
            self.say("Please enter the names for: ")?;
        }
        let mut names = Vec::new();
        for i in 1..=count {
            let name = loop {
                let name = self.ask(&format!("Player {i}: "))?;
                if !name.is_empty() {
                    break name;
                }
            };
            names.push(name);
        }
        Ok(names)
    }

    /// Keeps asking until the answer has the shape of a coordinate pair.
    pub fn ask_coordinate(&mut self) -> anyhow::Result<Coord2> {
        loop {
            let answer = self.ask("Enter the coordinates for guess: ")?;
            match parse_coordinate(&answer) {
                Ok(coords) => return Ok(coords),
                Err(err) => self.say(format_args!("{err}. Please try again."))?,
            }
        }
    }
}
