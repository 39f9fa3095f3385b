// rpnline defaults
// Edit this file to change the built-in settings and keybindings. A config
// file passed with --config is merged on top of these.

use crate::config::{self, Config};
use crate::core::history::DEFAULT_HISTORY_SIZE;

/// Install the default settings and keybindings
pub fn configure(config: &mut Config) {
    config.set(config::PROMPT, config::DEFAULT_PROMPT);
    config.set(config::HISTORY_SIZE, DEFAULT_HISTORY_SIZE);
    config.set(config::WIDTH, config::DEFAULT_WIDTH);

    // Movement
    config.bind("Left", "backward-character");
    config.bind("Right", "forward-character");
    config.bind("^B", "backward-character");
    config.bind("^F", "forward-character");
    config.bind("Home", "beginning-of-line");
    config.bind("End", "end-of-line");
    config.bind("^A", "beginning-of-line");
    config.bind("^E", "end-of-line");

    // History
    config.bind("Up", "previous-history");
    config.bind("Down", "next-history");
    config.bind("PageUp", "previous-history");
    config.bind("PageDown", "next-history");
    config.bind("^P", "previous-history");
    config.bind("^N", "next-history");

    // Editing
    config.bind("Backspace", "delete-previous-character");
    config.bind("Delete", "delete-next-character");
    config.bind("^D", "delete-next-character");
    config.bind("^K", "kill-to-end-of-line");
    config.bind("^U", "kill-to-beginning-of-line");
    config.bind("Esc", "clear-line");
    config.bind("Tab", "insert-tab");
    config.bind("Enter", "submit-line");

    config.bind("^C", "quit");
}
