//! Application execution modes for rpnline.
//!
//! This module contains the implementation of the different front ends:
//! - Line mode, a plain REPL over any reader/writer pair
//! - Terminal mode, the full-screen crossterm UI
//! - Expression mode, a one-shot evaluation of a command-line argument

mod line;
mod tui;

use std::io::{IsTerminal, Write};

pub use line::run_line_mode;
pub use tui::{TuiApp, run_terminal_mode};

use crate::cli::Cli;
use crate::core::{Stack, evaluate};

/// Front end to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Line,
    Terminal,
    Expression,
}

/// Pick the mode from CLI flags, falling back to detection.
pub fn select_mode(cli: &Cli) -> RunMode {
    if cli.expression.is_some() {
        RunMode::Expression
    } else if cli.line {
        RunMode::Line
    } else if cli.tui {
        RunMode::Terminal
    } else {
        detect_mode()
    }
}

/// Detect the appropriate mode based on environment.
pub fn detect_mode() -> RunMode {
    let is_stdin_tty = std::io::stdin().is_terminal();
    let is_stdout_tty = std::io::stdout().is_terminal();
    detect_mode_internal(is_stdin_tty, is_stdout_tty)
}

/// Internal mode detection with injectable terminal checks.
pub fn detect_mode_internal(is_stdin_tty: bool, is_stdout_tty: bool) -> RunMode {
    if is_stdin_tty && is_stdout_tty {
        RunMode::Terminal
    } else {
        RunMode::Line
    }
}

/// Evaluate `expression` on a fresh stack and print the result.
pub fn run_expression_mode<W: Write>(
    expression: &str,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stack = Stack::new();
    evaluate(&mut stack, expression)?;
    writeln!(out, "{}", stack)?;
    Ok(())
}
