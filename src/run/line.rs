//! Line mode: a prompt-and-read loop over plain streams.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::Config;
use crate::core::LineBuffer;
use crate::core::session::{HELP, Outcome, Session};

/// Run the REPL until `input` is exhausted or the user quits.
///
/// Prompts and results go to `out`; evaluation errors go to `err` as
/// `error: <message>`.
pub fn run_line_mode<R, W, E>(
    config: &Config,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let prompt = config.prompt();
    let mut buffer = LineBuffer::with_history_size(config.history_size());
    let mut session = Session::new();
    let mut raw = String::new();

    info!("starting line mode");
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        raw.clear();
        if input.read_line(&mut raw)? == 0 {
            debug!("end of input");
            break;
        }

        buffer.insert_text(raw.trim_end_matches(['\n', '\r']));
        let line = buffer.commit();

        match session.execute(&line) {
            Outcome::Silent => {}
            Outcome::Output(text) => writeln!(out, "{}", text)?,
            Outcome::Help => write!(out, "{}", HELP)?,
            Outcome::Error(e) => writeln!(err, "error: {}", e)?,
            Outcome::Quit => break,
        }
    }
    out.flush()?;
    debug!(history = buffer.history().len(), "line mode finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_config;

    fn run(input: &str) -> (String, String) {
        let mut config = Config::default();
        user_config::configure(&mut config);
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_line_mode(&config, input.as_bytes(), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_list_after_sum() {
        let (out, err) = run("3 1 2 + +\nls\n");
        assert_eq!(out, "> > [6]\n> ");
        assert_eq!(err, "");
    }

    #[test]
    fn test_errors_go_to_err_stream() {
        let (out, err) = run("1 0 /\nl\n");
        assert_eq!(out, "> > [1]\n> ");
        assert_eq!(err, "error: cannot divide by 0\n");
    }

    #[test]
    fn test_quit_stops_reading() {
        let (out, _) = run("1\nquit\n2\nls\n");
        assert_eq!(out, "> > ");
    }

    #[test]
    fn test_pop_and_help() {
        let (out, _) = run("4 2.5\npop\nh\n");
        assert!(out.starts_with("> > 2.5\n> "));
        assert!(out.contains("r: reset stack"));
    }

    #[test]
    fn test_crlf_input() {
        let (out, err) = run("2 3 ^\r\nls\r\n");
        assert_eq!(out, "> > [8]\n> ");
        assert_eq!(err, "");
    }
}
