//! # Interactive Shell
//!
//! The menu-driven loop that owns the roster.
//!
//! The loop is an explicit state machine. Each iteration prints the prompt
//! for the current state, blocks on one line of input, and moves to the next
//! state:
//!
//! ```text
//! Menu ─"1"─▶ AwaitName ─▶ AwaitAge ─▶ AwaitGrades ─▶ Menu
//! Menu ─"3"─▶ AwaitSearchTerm ─▶ Menu
//! Menu ─"2" | "4" | other─▶ Menu
//! Menu ─"5"─▶ Exit
//! ```
//!
//! End of input in any state is a graceful shutdown.

use crate::render::{self, OutputMode};
use classbook_core::{ClassReport, Roster, StudentRecord};
use std::io::{BufRead, Write};
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Failures that end the shell.
///
/// Validation errors never show up here; they are reported to the user and
/// the loop continues.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON view could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// STATE
// =============================================================================

/// Where the shell is in the conversation.
///
/// Registration answers travel inside the states until all three are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Menu,
    AwaitName,
    AwaitAge { name: String },
    AwaitGrades { name: String, age: String },
    AwaitSearchTerm,
    Exit,
}

// =============================================================================
// SHELL
// =============================================================================

/// Interactive roster session over any line reader and writer.
pub struct Shell<R, W> {
    input: R,
    output: W,
    mode: OutputMode,
    roster: Roster,
    state: State,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell with an empty roster, starting at the menu.
    pub fn new(input: R, output: W, mode: OutputMode) -> Self {
        Self {
            input,
            output,
            mode,
            roster: Roster::new(),
            state: State::Menu,
        }
    }

    /// The roster owned by this session.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Consume the shell and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        while self.state != State::Exit {
            self.prompt()?;

            let Some(line) = self.read_line()? else {
                tracing::info!("Input closed, shutting down");
                self.state = State::Exit;
                break;
            };

            let next = self.step(line)?;
            tracing::debug!(?next, "State transition");
            self.state = next;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Feed one line of input to the current state and return the next one.
    pub fn step(&mut self, line: String) -> Result<State, ShellError> {
        let current = std::mem::replace(&mut self.state, State::Menu);
        match current {
            State::Menu => self.dispatch(line.trim()),
            State::AwaitName => Ok(State::AwaitAge { name: line }),
            State::AwaitAge { name } => Ok(State::AwaitGrades { name, age: line }),
            State::AwaitGrades { name, age } => {
                self.register(&name, &age, &line)?;
                Ok(State::Menu)
            }
            State::AwaitSearchTerm => {
                self.search(&line)?;
                Ok(State::Menu)
            }
            State::Exit => Ok(State::Exit),
        }
    }

    fn dispatch(&mut self, choice: &str) -> Result<State, ShellError> {
        match choice {
            "1" => Ok(State::AwaitName),
            "2" => {
                render::write_listing(&mut self.output, self.mode, &self.roster)?;
                Ok(State::Menu)
            }
            "3" => Ok(State::AwaitSearchTerm),
            "4" => {
                let report = ClassReport::from_roster(&self.roster);
                render::write_report(&mut self.output, self.mode, &report)?;
                Ok(State::Menu)
            }
            "5" => {
                writeln!(self.output, "{}", render::GOODBYE)?;
                Ok(State::Exit)
            }
            other => {
                tracing::debug!(choice = other, "Unknown menu option");
                writeln!(self.output, "{}", render::INVALID_OPTION)?;
                writeln!(self.output)?;
                Ok(State::Menu)
            }
        }
    }

    fn register(&mut self, name: &str, age: &str, grades: &str) -> Result<(), ShellError> {
        match StudentRecord::from_input(name, age, grades) {
            Ok(record) => {
                tracing::info!(name = record.name(), "Student registered");
                self.roster.append(record);
                writeln!(self.output, "{}", render::REGISTERED)?;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Registration rejected");
                writeln!(self.output, "Erro: {}", e)?;
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn search(&mut self, term: &str) -> Result<(), ShellError> {
        let matches = self.roster.search(term);
        tracing::debug!(term, hits = matches.len(), "Search");
        render::write_search(&mut self.output, self.mode, term, &matches)
    }

    fn prompt(&mut self) -> Result<(), ShellError> {
        let text = match &self.state {
            State::Menu => {
                render::write_menu(&mut self.output)?;
                render::PROMPT_CHOICE
            }
            State::AwaitName => render::PROMPT_NAME,
            State::AwaitAge { .. } => render::PROMPT_AGE,
            State::AwaitGrades { .. } => render::PROMPT_GRADES,
            State::AwaitSearchTerm => render::PROMPT_SEARCH,
            State::Exit => return Ok(()),
        };
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its terminator. `None` means end of input.
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
