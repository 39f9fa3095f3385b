//! Command-line argument parsing for rpnline.
//!
//! This module provides the `Cli` struct which encapsulates all command-line
//! options and the overrides they apply to a [`Config`].

use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, Config};

/// Command-line interface configuration.
#[derive(Debug, Default, Parser)]
#[command(name = "rpnline")]
#[command(about = "Reverse Polish notation calculator", long_about = None)]
pub struct Cli {
    /// Expression to evaluate once; prints the resulting stack and exits
    pub expression: Option<String>,

    /// Force line mode (read lines from stdin)
    #[arg(long, conflicts_with = "tui")]
    pub line: bool,

    /// Force terminal (TUI) mode
    #[arg(long)]
    pub tui: bool,

    /// Prompt shown before the input line
    #[arg(long)]
    pub prompt: Option<String>,

    /// Number of submitted lines kept in history
    #[arg(long)]
    pub history_size: Option<usize>,

    /// Visible width of the input line, in characters
    #[arg(long)]
    pub width: Option<usize>,

    /// TOML file with [settings] and [keybindings] tables
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply CLI overrides to a configuration object.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(prompt) = &self.prompt {
            config.set(config::PROMPT, prompt.as_str());
        }
        if let Some(size) = self.history_size {
            config.set(config::HISTORY_SIZE, size);
        }
        if let Some(width) = self.width {
            config.set(config::WIDTH, width);
        }
    }
}
