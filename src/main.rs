//! rpnline - a reverse Polish notation calculator
//!
//! This is the main entry point. It parses CLI arguments, layers the
//! configuration and delegates to the appropriate mode runner (line,
//! terminal, or one-shot expression).

use std::io;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use rpnline::{cli, config, run, user_config};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();
    let mode = run::select_mode(&cli);
    init_logging(cli.verbose, mode);

    // Defaults, then the config file, then CLI overrides
    let mut config = config::Config::default();
    user_config::configure(&mut config);
    if let Some(path) = &cli.config {
        config.merge_file(path)?;
    }
    cli.apply_to_config(&mut config);
    config.validate()?;

    debug!(?mode, "selected mode");
    match mode {
        run::RunMode::Expression => {
            let expression = cli.expression.as_deref().unwrap_or_default();
            run::run_expression_mode(expression, &mut io::stdout())?;
        }
        run::RunMode::Line => {
            run::run_line_mode(&config, io::stdin().lock(), &mut io::stdout(), &mut io::stderr())?;
        }
        run::RunMode::Terminal => {
            run::run_terminal_mode(&config)?;
        }
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins; otherwise `--verbose` means debug, and the
/// terminal UI stays quiet so log lines cannot land on the screen.
fn init_logging(verbose: bool, mode: run::RunMode) {
    let default = match (verbose, mode) {
        (true, _) => "debug",
        (false, run::RunMode::Terminal) => "off",
        (false, _) => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
