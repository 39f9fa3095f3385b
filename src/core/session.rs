//! Calculator session: command words plus expression evaluation.
//!
//! A submitted line is either a command word (`help`, `list`, `pop`,
//! `reset`, `quit`, or any prefix of one, plus `ls`) or a postfix
//! expression applied to the session stack.

use tracing::{debug, info};

use crate::core::error::CalcError;
use crate::core::eval::evaluate;
use crate::core::stack::{Stack, format_number};

pub const HELP: &str = "\
h: print this help
q: quit
p: pop and show last element of stack
r: reset stack
l: show stack

Supported operations:
\t+: sum
\t-: diff
\t/: div
\t*: mul
\t^: pow
";

/// Command words understood by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Pop,
    Reset,
    Quit,
}

impl Command {
    const WORDS: [(&'static str, Command); 5] = [
        ("help", Command::Help),
        ("list", Command::List),
        ("pop", Command::Pop),
        ("reset", Command::Reset),
        ("quit", Command::Quit),
    ];

    /// Match a normalized word against command names and their prefixes
    pub fn parse(word: &str) -> Option<Self> {
        if word.is_empty() {
            return None;
        }
        if word == "ls" {
            return Some(Command::List);
        }
        Self::WORDS
            .iter()
            .find(|(name, _)| name.starts_with(word))
            .map(|&(_, command)| command)
    }
}

/// Result of executing one line
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing to print
    Silent,
    /// A line of output
    Output(String),
    /// The help text
    Help,
    /// A recoverable error to report
    Error(CalcError),
    /// The user asked to leave
    Quit,
}

/// Stack plus command dispatch
#[derive(Debug, Clone, Default)]
pub struct Session {
    stack: Stack,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-populated stack
    pub fn with_stack(stack: Stack) -> Self {
        Self { stack }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Execute one submitted line
    pub fn execute(&mut self, line: &str) -> Outcome {
        let line = line.trim().to_lowercase();

        let Some(command) = Command::parse(&line) else {
            return match evaluate(&mut self.stack, &line) {
                Ok(()) => Outcome::Silent,
                Err(e) => {
                    debug!(expression = %line, error = %e, "evaluation failed");
                    Outcome::Error(e)
                }
            };
        };

        debug!(?command, "running command");
        match command {
            Command::Help => Outcome::Help,
            Command::List => Outcome::Output(self.stack.to_string()),
            Command::Pop => match self.stack.pop() {
                Ok(value) => Outcome::Output(format_number(value)),
                Err(e) => Outcome::Error(e),
            },
            Command::Reset => {
                self.stack = Stack::new();
                Outcome::Silent
            }
            Command::Quit => {
                info!("quit requested");
                Outcome::Quit
            }
        }
    }
}
