// ABOUTME: Main entry point for the Alert-Box demo TUI

use alert_box::app::{App, EventHandler};
use alert_box::components::LayoutComponent;
use alert_box::config::AppConfig;
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, Terminal};
use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

#[derive(Debug, Parser)]
#[command(name = "alert-box", version, about = "Toast alerts with auto-dismiss timers")]
struct Args {
    /// Milliseconds before an alert closes itself
    #[arg(long)]
    auto_close_ms: Option<u64>,

    /// Most toasts shown at once
    #[arg(long)]
    max_visible: Option<usize>,

    /// Path to a config.toml to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging();
    setup_panic_handler();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(ms) = args.auto_close_ms {
        config.alerts.auto_close_ms = ms;
    }
    if let Some(max) = args.max_visible {
        config.ui.max_visible = max;
    }

    let mut app = App::from_config(&config);
    let mut layout = LayoutComponent::new(config.ui.max_visible);

    let result = run_tui(&mut app, &mut layout);
    app.shutdown();

    result
}

fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = app.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm::event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    if let Some(app_event) =
                        EventHandler::handle_key_event(key_event, &mut app.state)
                    {
                        EventHandler::process_event(app_event, &mut app.state);
                        // Apply alert requests right away instead of waiting a tick
                        app.tick();
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();

            if app.needs_ui_refresh() {
                terminal.draw(|frame| {
                    layout.render(frame, &app.state);
                })?;
            }
        }

        if app.state.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use std::fs::OpenOptions;

    let log_dir = std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".alert-box").join("logs"))
        .unwrap_or_else(|_| PathBuf::from(".alert-box/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "alert-box-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // Logging is best effort; the TUI owns stdout so there is nowhere else to write
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false)
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alert_box=info".into())
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        let _ = disable_raw_mode();
        let _ = execute!(
            std::io::stderr(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
