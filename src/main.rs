// radarscope - Tech Radar viewer
// Lays out classified blips on a quadrant/ring chart in the terminal

mod app;
mod ui;

use anyhow::{Context, Result};
use app::{
    config::TICK_INTERVAL_MS,
    event::{handle_key_event, handle_mouse_event},
    AppState,
};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use radarscope::cli::{self, Args};
use radarscope::{radar, store};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// The UI modules address the palette as crate::theme
use radarscope::theme;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Send logs to a file; stdout belongs to the terminal UI
fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.dump_layout {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .init();
        cli::write_layout_dump(&args, io::stdout().lock())?;
        println!();
        return Ok(());
    }

    if let Some(path) = &args.log_file {
        init_file_logging(path)?;
    }

    // Load and validate before touching the terminal so errors print normally
    let config = args.layout_config();
    config.validate()?;
    let raws = store::load_or_sample(args.data.as_deref())?;
    let batch = radar::validate_batch(raws, args.validation_policy())?;
    tracing::info!(
        blips = batch.blips.len(),
        rejected = batch.rejected.len(),
        seed = args.seed,
        "Starting radarscope"
    );
    let mut app = AppState::new(batch.blips, batch.rejected.len(), config, args.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    let tick = Duration::from_millis(TICK_INTERVAL_MS);
    loop {
        app.on_tick();
        terminal.draw(|f| ui::draw(f, app))?;

        if !app.running {
            return Ok(());
        }

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(app, key);
                }
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                _ => {}
            }
        }
    }
}
