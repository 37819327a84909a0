//! Lookout CLI - binary entry point and terminal session management.
//!
//! The binary bridges [`lookout_engine`] (application state) and
//! [`lookout_tui`] (rendering), providing RAII-based terminal management
//! with guaranteed cleanup.
//!
//! # Event Loop
//!
//! A fixed 8ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain key events (non-blocking)
//! 3. Advance the animation clock (`app.tick()`)
//! 4. Drain completed fetches (`app.process_events()`)
//! 5. Render frame

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use lookout_engine::{App, LookoutConfig};
use lookout_tui::{draw, handle_events};

const FRAME_DURATION: Duration = Duration::from_millis(8);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    if let Some((log_path, file)) = open_log_file() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %log_path.display(), "Logging initialized");
        return;
    }

    // Without a log file, prefer "no logs" over corrupting the TUI by
    // writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> Option<(PathBuf, fs::File)> {
    let dir = lookout_engine::config::log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join("lookout.log");
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
    Some((path, file))
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored to their original
/// configuration even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match LookoutConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring unreadable config");
            LookoutConfig::default()
        }
    };

    let mut app = App::new(&config);
    let mut session = TerminalSession::new()?;

    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        frames.tick().await;

        if handle_events(&mut app)? {
            app.quit();
        }
        if app.should_quit() {
            break;
        }

        app.tick();
        app.process_events();

        session.terminal.draw(|frame| draw(frame, &app))?;
    }

    Ok(())
}
