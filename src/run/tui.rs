//! Terminal (TUI) mode implementation.

use std::io;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::core::LineBuffer;
use crate::core::input::InputEvent;
use crate::core::keymap::{Keymap, LineEvent};
use crate::core::session::{HELP, Outcome, Session};
use crate::terminal;
use crate::terminal::events::TerminalEvent;
use crate::terminal::render::{self, Frame, FrameParts};

/// Full-screen calculator state, independent of the terminal
pub struct TuiApp {
    session: Session,
    buffer: LineBuffer,
    keymap: Keymap,
    prompt: String,
    width: usize,
    output: String,
    show_help: bool,
    quitting: bool,
}

impl TuiApp {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(),
            buffer: LineBuffer::with_history_size(config.history_size()),
            keymap: Keymap::from_config(config),
            prompt: config.prompt().to_string(),
            width: config.width(),
            output: String::new(),
            show_help: false,
            quitting: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Text of the output line
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Feed one key. Returns true once the app should exit.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match self.keymap.apply(&mut self.buffer, event) {
            LineEvent::Continue => {}
            LineEvent::Submitted(line) => self.submit(&line),
            LineEvent::Quit => self.quitting = true,
        }
        self.quitting
    }

    fn submit(&mut self, line: &str) {
        self.show_help = false;
        self.output = match self.session.execute(line) {
            Outcome::Silent => String::new(),
            Outcome::Output(text) => text,
            Outcome::Help => {
                self.show_help = true;
                String::new()
            }
            Outcome::Error(e) => format!("error: {}", e),
            Outcome::Quit => {
                self.quitting = true;
                String::new()
            }
        };
    }

    /// Compose the current screen
    pub fn frame(&mut self) -> Frame {
        let input = self.buffer.view(self.width);
        let stack = self.session.stack().values();
        render::compose_frame(FrameParts {
            prompt: &self.prompt,
            input: &input,
            output: &self.output,
            stack: &stack,
            width: self.width,
            help: if self.show_help {
                HELP
            } else {
                render::SHORT_HELP
            },
        })
    }
}

/// Run in terminal (TUI) mode.
pub fn run_terminal_mode(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = TuiApp::new(config);

    let _raw_mode = terminal::raw::RawMode::new()?;
    info!("starting terminal mode");

    let mut stdout = io::stdout();
    render::draw_frame(&mut stdout, &app.frame())?;

    loop {
        if !terminal::events::poll(Duration::from_millis(100))? {
            continue;
        }
        match terminal::events::read()? {
            TerminalEvent::Input(event) => {
                if app.handle_input(&event) {
                    break;
                }
            }
            TerminalEvent::Resize(cols, rows) => debug!(cols, rows, "terminal resized"),
            TerminalEvent::None => continue,
        }
        render::draw_frame(&mut stdout, &app.frame())?;
    }

    info!("leaving terminal mode");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Key;
    use crate::user_config;

    fn new_app() -> TuiApp {
        let mut config = Config::default();
        user_config::configure(&mut config);
        TuiApp::new(&config)
    }

    fn type_line(app: &mut TuiApp, text: &str) -> bool {
        for c in text.chars() {
            app.handle_input(&InputEvent::char(c));
        }
        app.handle_input(&Key::Enter.into())
    }

    #[test]
    fn test_evaluate_and_list() {
        let mut app = new_app();
        type_line(&mut app, "1 2 +");
        assert_eq!(app.output(), "");
        type_line(&mut app, "l");
        assert_eq!(app.output(), "[3]");

        let frame = app.frame();
        assert_eq!(frame.lines[0], "> ");
        assert_eq!(frame.lines[1], "[3]");
        assert_eq!(frame.lines[2], "[3.00]");
        assert_eq!(frame.cursor, (2, 0));
    }

    #[test]
    fn test_error_output() {
        let mut app = new_app();
        type_line(&mut app, "1 x");
        assert_eq!(
            app.output(),
            "error: unexpected character: x (at position 2)"
        );
        assert_eq!(app.session().stack().values(), vec![1.0]);
    }

    #[test]
    fn test_help_toggles_footer() {
        let mut app = new_app();
        type_line(&mut app, "help");
        assert!(app.frame().lines.iter().any(|l| l == "r: reset stack"));
        type_line(&mut app, "1");
        assert!(!app.frame().lines.iter().any(|l| l == "r: reset stack"));
    }

    #[test]
    fn test_history_recall() {
        let mut app = new_app();
        type_line(&mut app, "2 2 ^");
        app.handle_input(&Key::Up.into());
        assert_eq!(app.buffer().content(), "2 2 ^");
    }

    #[test]
    fn test_quit_command_and_key() {
        let mut app = new_app();
        assert!(type_line(&mut app, "q"));
        assert!(app.is_quitting());

        let mut app = new_app();
        assert!(app.handle_input(&Key::Ctrl('c').into()));
    }
}
