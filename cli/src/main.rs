//! Folio CLI - binary entry point and terminal session management.
//!
//! # Event Loop
//!
//! A single-threaded tokio runtime drives a fixed frame cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`input::InputPump`])
//! 3. Apply key actions to the app
//! 4. Advance site time (`app.tick()`), firing deferred effects
//! 5. Write whatever changed
//! 6. Check for quit
//!
//! Every handler runs to completion before the next event is looked at.

mod app;
mod input;
mod render;

use anyhow::Result;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::{
    fs::{self, OpenOptions},
    io::{Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio_config::FolioConfig;
use folio_engine::Site;

use crate::app::App;
use crate::input::InputPump;

const FRAME_DURATION: Duration = Duration::from_millis(16);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_folio_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, drop logs rather than interleave them with the UI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_folio_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in folio_log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn folio_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.folio/logs/folio.log
    if let Some(config_path) = FolioConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("folio.log"));
    }

    // Fallback: ./.folio/logs/folio.log
    candidates.push(PathBuf::from(".folio").join("logs").join("folio.log"));

    candidates
}

/// Raw mode for the lifetime of the session, restored on drop.
struct TerminalSession;

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut out = stdout();
        let _ = out.write_all(b"\r\n");
        let _ = out.flush();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let settings = FolioConfig::load()
        .map(|config| config.settings())
        .unwrap_or_default();
    let site = Site::new(settings)?;
    let mut app = App::new(site);

    let result = {
        let _session = TerminalSession::new()?;
        run(&mut app).await
    };

    if let Err(err) = &result {
        tracing::error!("Session ended with error: {err:?}");
    }
    result
}

async fn run(app: &mut App) -> Result<()> {
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut out = stdout();
    let mut last_tick = Instant::now();

    let result: Result<()> = loop {
        frames.tick().await;

        match input.drain() {
            Ok(actions) => {
                for action in actions {
                    app.handle(action);
                }
            }
            Err(e) => break Err(e),
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;

        if let Err(e) = render::present(&mut out, app) {
            break Err(e.into());
        }

        if app.should_quit() {
            break Ok(());
        }
    };

    input.shutdown().await;
    result
}
