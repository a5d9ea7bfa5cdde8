//! ward-tui - Terminal dashboard for hospital operations
//!
//! Stat cards, critical patient alerts and live census panels, driven by the
//! wardview event bus and view router.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libwardview::logging::{self, LogFormat};
use libwardview::Config;
use ward_tui::{
    app::event::{EventHandler, TuiEvent},
    error::exit_code,
    map_key,
    terminal::{install_panic_hook, TerminalGuard, Tui},
    ui, AppState, Shell,
};

#[derive(Parser, Debug)]
#[command(name = "ward-tui")]
#[command(about = "Terminal dashboard for hospital operations", long_about = None)]
struct Cli {
    /// Configuration file (defaults to WARDVIEW_CONFIG or the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log format (text, json or pretty); logs only go to WARDVIEW_LOG_FILE
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Freeze the simulated live panels
    #[arg(long)]
    no_live: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> Result<()> {
    // The terminal belongs to the UI, so logs need a file
    let mut log_config = logging::from_env();
    if let Some(format) = cli.log_format {
        log_config.format = format;
    }
    if log_config.file.is_some() {
        log_config.init().context("failed to initialize logging")?;
    }

    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load_or_default().context("failed to load config")?,
    };

    let mut state = AppState::new();
    if std::env::var("WARD_TUI_TICK_MS").is_err() {
        state.config.tick_rate_ms = config.ui.tick_rate_ms;
    }

    let shell = Shell::new(&config, !cli.no_live).context("failed to start dashboard")?;
    tracing::info!(live = shell.is_live(), "ward-tui starting");

    install_panic_hook();
    let mut guard = TerminalGuard::setup().context("failed to set up terminal")?;
    run_app(guard.terminal_mut(), shell, state)
}

fn run_app(terminal: &mut Tui, mut shell: Shell, mut state: AppState) -> Result<()> {
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        let snapshot = shell.snapshot();
        terminal.draw(|frame| ui::render(frame, &state, &snapshot))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => map_key(&state, snapshot.view, key),
            other => Some(other.into()),
        };

        if let Some(action) = action {
            state = shell.dispatch(state, action);
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!("ward-tui exiting");
    Ok(())
}
