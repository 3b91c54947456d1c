//! Line-oriented shell over a [`Game`].
//!
//! Each line is one command. Rule violations are printed and the loop goes
//! on; only I/O failures end the shell early.
use std::io::{BufRead, Write};

use anyhow::Result;
use droll_core::RandRange;
use droll_runtime::{Game, GameState};

const QUIT: &str = "quit";
const HELP: &str = "help";

pub struct Shell<R: RandRange> {
    game: Game<R>,
}

impl<R: RandRange> Shell<R> {
    pub fn new(game: Game<R>) -> Self {
        Self { game }
    }

    /// Reads commands until end of input, `quit`, or the end of the game,
    /// returning the final score.
    pub fn run(mut self, input: impl BufRead, mut output: impl Write) -> Result<u32> {
        writeln!(output, "{}", self.game.summary())?;
        write!(output, "{} ", self.game.prompt())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.eq_ignore_ascii_case(QUIT) {
                break;
            }

            if line.is_empty() || line.eq_ignore_ascii_case(HELP) {
                let commands = self.game.feasible_commands();
                writeln!(output, "Feasible commands: {}", commands.join(" "))?;
            } else {
                match self.game.execute(line) {
                    Ok(GameState::Done) => {
                        writeln!(output)?;
                        writeln!(output, "{}", self.game.summary())?;
                        writeln!(output, "Game over. {}", self.game.prompt())?;
                        return Ok(self.game.score());
                    }
                    Ok(GameState::Play) => {}
                    Err(err) => writeln!(output, "{err}")?,
                }
            }

            writeln!(output)?;
            writeln!(output, "{}", self.game.summary())?;
            write!(output, "{} ", self.game.prompt())?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(self.game.score())
    }
}
