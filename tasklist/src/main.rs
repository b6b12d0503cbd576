//! `tasklist`: a terminal to-do list.
//!
//! Configuration via CLI flags, environment variables, or config file
//! (`~/.config/tasklist/config.toml`).
//!
//! ```bash
//! cargo run --bin tasklist
//!
//! # Keep errors on screen for two seconds, reference dismissal behaviour
//! cargo run --bin tasklist -- --error-clear-ms 2000 --error-clear-policy unconditional
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

use tasklist::app::App;
use tasklist::config::{AppConfig, CliArgs};
use tasklist::timer::{ErrorTimer, TimerEvent};
use tasklist::ui;
use tasklist_core::Effect;

/// Capacity of the timer event channel.
const TIMER_CHANNEL_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > env > config file > defaults).
    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            AppConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!(
        error_clear_delay = ?config.error_clear_delay,
        policy = %config.error_clear_policy,
        "tasklist starting"
    );

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("tasklist exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("tasklist.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
///
/// Must run inside the tokio runtime: error timers are spawned onto it.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> io::Result<()> {
    let mut app = App::new().with_clear_policy(config.error_clear_policy);
    let (timer, mut timer_rx) =
        ErrorTimer::channel(config.error_clear_delay, TIMER_CHANNEL_CAPACITY);

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Apply any expired error timers.
        drain_timer_events(&mut app, &mut timer_rx);

        // Step 3: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(Effect::ScheduleErrorClear(generation)) = app.handle_key_event(key) {
                timer.schedule(generation);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Drain all pending `TimerEvent`s from the receiver and apply them to the app.
fn drain_timer_events(app: &mut App, rx: &mut mpsc::Receiver<TimerEvent>) {
    while let Ok(event) = rx.try_recv() {
        app.handle_timer_event(event);
    }
}
