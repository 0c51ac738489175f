//! Interactive prompt loop.
//!
//! `Prompt` reads commands from any `BufRead` and writes to any `Write`, so
//! the same code serves stdin/stdout and the tests. `Table` seats an
//! optional bot opposite the human.

use crate::parser::{parse_command, Command, ParseError, USAGE};
use crate::render::{render_board, render_inventory};
use std::io::{self, BufRead, Write};
use tak_core::{Action, ActionSource, Bot, GameEvent, GameState, Violation};
use tracing::{error, info};

const META_HELP: &str = "Other commands: 'inventory', 'board', 'help', 'quit'";

/// Reads player commands from a terminal-like stream
pub struct Prompt<R, W> {
    input: R,
    output: W,
    colorize: bool,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W, colorize: bool) -> Self {
        Self {
            input,
            output,
            colorize,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn scold(&mut self, problems: &[String]) -> io::Result<()> {
        for problem in problems {
            writeln!(self.output, "{}", problem)?;
        }
        writeln!(self.output, "Please try again!")
    }

    /// Ask until the player enters an action, quits, or input ends
    fn ask(&mut self, state: &GameState, rejected: Option<&[Violation]>) -> io::Result<Option<Action>> {
        if let Some(violations) = rejected {
            let problems: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
            self.scold(&problems)?;
        }
        write!(self.output, "{}", render_board(&state.board, self.colorize))?;

        loop {
            write!(self.output, "[{}] {}? ", state.current_player(), USAGE)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match parse_command(&line) {
                Ok(Command::Play(action)) => return Ok(Some(action)),
                Ok(Command::Quit) => return Ok(None),
                Ok(Command::Inventory) => write!(self.output, "{}", render_inventory(state))?,
                Ok(Command::Board) => {
                    write!(self.output, "{}", render_board(&state.board, self.colorize))?
                }
                Ok(Command::Help) => writeln!(self.output, "{}\n{}", USAGE, META_HELP)?,
                Err(ParseError::Empty) => {}
                Err(e) => self.scold(&[e.to_string()])?,
            }
        }
    }
}

impl<R: BufRead, W: Write> ActionSource for Prompt<R, W> {
    fn next_action(&mut self, state: &GameState, rejected: Option<&[Violation]>) -> Option<Action> {
        match self.ask(state, rejected) {
            Ok(action) => action,
            Err(e) => {
                error!("failed to read command: {}", e);
                None
            }
        }
    }
}

/// A human at the prompt, optionally playing against a bot
pub struct Table<R, W> {
    prompt: Prompt<R, W>,
    bot: Option<Bot>,
}

impl<R: BufRead, W: Write> Table<R, W> {
    pub fn new(prompt: Prompt<R, W>, bot: Option<Bot>) -> Self {
        Self { prompt, bot }
    }

    pub fn into_prompt(self) -> Prompt<R, W> {
        self.prompt
    }
}

impl<R: BufRead, W: Write> ActionSource for Table<R, W> {
    fn next_action(&mut self, state: &GameState, rejected: Option<&[Violation]>) -> Option<Action> {
        match self.bot.as_mut() {
            Some(bot) if bot.color == state.current_player() => {
                let action = bot.choose_action(state);
                if let Some(action) = &action {
                    if let Err(e) = writeln!(self.prompt.output, "bot plays {:?}", action) {
                        error!("failed to announce bot action: {}", e);
                    }
                }
                action
            }
            _ => self.prompt.next_action(state, rejected),
        }
    }

    fn on_events(&mut self, _state: &GameState, events: &[GameEvent]) {
        for event in events {
            info!(?event, "turn event");
        }
    }
}
