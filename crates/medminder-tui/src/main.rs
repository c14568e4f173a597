use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use medminder_store::create_store;
use medminder_tui::app::App;
use medminder_tui::config::Config;
use ratatui::prelude::*;
use tracing::info;

const TOAST_POLL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_path())?;

    let store_config = config.store_config();
    info!("medminder starting, store: {}", store_config.file_path().display());
    let app = App::new(create_store(&store_config));

    let result = run_tui(app);
    info!("medminder exiting");
    result
}

/// Logs go to a file because the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e}");
    }

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Poll while a toast is up so it can expire, block otherwise
        if app.needs_polling() && !event::poll(TOAST_POLL)? {
            app.tick();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            // q quits unless we're typing
            if key.code == KeyCode::Char('q') && !app.is_input_mode() {
                break;
            }
            app.handle_key(key);
        }
    }

    Ok(())
}
