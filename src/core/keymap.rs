//! Key to line-editing command mapping
//!
//! Commands are bound by name in the config (`"^A" = "beginning-of-line"`).
//! Printable keys without a binding insert themselves.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::config::Config;
use crate::core::input::{InputEvent, Key};
use crate::core::line_buffer::LineBuffer;

/// Named line-buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCommand {
    BackwardChar,
    ForwardChar,
    BeginningOfLine,
    EndOfLine,
    PreviousHistory,
    NextHistory,
    DeletePrevious,
    DeleteNext,
    KillToBeginning,
    KillToEnd,
    ClearLine,
    InsertTab,
    Submit,
    Quit,
}

impl LineCommand {
    pub const ALL: [LineCommand; 14] = [
        LineCommand::BackwardChar,
        LineCommand::ForwardChar,
        LineCommand::BeginningOfLine,
        LineCommand::EndOfLine,
        LineCommand::PreviousHistory,
        LineCommand::NextHistory,
        LineCommand::DeletePrevious,
        LineCommand::DeleteNext,
        LineCommand::KillToBeginning,
        LineCommand::KillToEnd,
        LineCommand::ClearLine,
        LineCommand::InsertTab,
        LineCommand::Submit,
        LineCommand::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LineCommand::BackwardChar => "backward-character",
            LineCommand::ForwardChar => "forward-character",
            LineCommand::BeginningOfLine => "beginning-of-line",
            LineCommand::EndOfLine => "end-of-line",
            LineCommand::PreviousHistory => "previous-history",
            LineCommand::NextHistory => "next-history",
            LineCommand::DeletePrevious => "delete-previous-character",
            LineCommand::DeleteNext => "delete-next-character",
            LineCommand::KillToBeginning => "kill-to-beginning-of-line",
            LineCommand::KillToEnd => "kill-to-end-of-line",
            LineCommand::ClearLine => "clear-line",
            LineCommand::InsertTab => "insert-tab",
            LineCommand::Submit => "submit-line",
            LineCommand::Quit => "quit",
        }
    }
}

impl fmt::Display for LineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineCommand::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| format!("Unknown command: {}", s))
    }
}

/// What the host should do after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// Keep editing
    Continue,
    /// A line was committed
    Submitted(String),
    /// Leave the session
    Quit,
}

/// Resolves key events to line commands
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: HashMap<Key, LineCommand>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the config's keybinding table, skipping bad entries
    pub fn from_config(config: &Config) -> Self {
        let mut keymap = Self::new();
        for (key, command) in &config.keybindings {
            match (key.parse::<Key>(), command.parse::<LineCommand>()) {
                (Ok(key), Ok(command)) => keymap.bind(key, command),
                (Err(e), _) | (_, Err(e)) => warn!(binding = %key, "ignoring keybinding: {}", e),
            }
        }
        keymap
    }

    pub fn bind(&mut self, key: Key, command: LineCommand) {
        self.bindings.insert(key, command);
    }

    pub fn lookup(&self, event: &InputEvent) -> Option<LineCommand> {
        self.bindings.get(&event.key).copied()
    }

    /// Run the command bound to `event` against `buffer`
    pub fn apply(&self, buffer: &mut LineBuffer, event: &InputEvent) -> LineEvent {
        let Some(command) = self.lookup(event) else {
            if let Some(c) = event.printable() {
                let mut utf8 = [0u8; 4];
                buffer.insert_text(c.encode_utf8(&mut utf8));
            }
            return LineEvent::Continue;
        };

        match command {
            LineCommand::BackwardChar => buffer.move_cursor(-1),
            LineCommand::ForwardChar => buffer.move_cursor(1),
            LineCommand::BeginningOfLine => buffer.move_to_start(),
            LineCommand::EndOfLine => buffer.move_to_end(),
            LineCommand::PreviousHistory => buffer.history_prev(),
            LineCommand::NextHistory => buffer.history_next(),
            LineCommand::DeletePrevious => buffer.backspace(),
            LineCommand::DeleteNext => buffer.delete_forward(),
            LineCommand::KillToBeginning => buffer.delete_to_start(),
            LineCommand::KillToEnd => buffer.delete_to_end(),
            LineCommand::ClearLine => buffer.clear(),
            LineCommand::InsertTab => buffer.insert_text("\t"),
            LineCommand::Submit => return LineEvent::Submitted(buffer.commit()),
            LineCommand::Quit => return LineEvent::Quit,
        }
        LineEvent::Continue
    }
}
