mod app;
mod clock;
mod domain;
mod error;
mod input;
mod logging;
mod persistence;
mod report;
mod task_store;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use clock::SystemClock;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_data_dir, init_local_data_dir, FileStore, KeyValueStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use task_store::TaskStore;

#[derive(Parser)]
#[command(name = "dayglass")]
#[command(about = "A terminal dashboard for timing today's tasks against a daily budget", long_about = None)]
struct Cli {
    /// Use this data directory instead of a local or home .dayglass
    #[arg(long, global = true, value_name = "PATH")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .dayglass directory in the current directory
    Init,
    /// Print today's budget summary and tasks
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            logging::init_stderr_logging()?;
            let current_dir =
                std::env::current_dir().context("Could not determine current directory")?;
            let data_dir = init_local_data_dir(&current_dir)?;
            println!("Initialized dayglass directory: {}", data_dir.display());
            println!();
            println!("Dayglass will now use this local directory for task storage.");
            println!("Run 'dayglass' to open today's dashboard.");
            Ok(())
        }
        Some(Commands::Status) => {
            logging::init_stderr_logging()?;
            print_status(cli.dir.as_deref())
        }
        None => run_tui(cli.dir.as_deref()),
    }
}

fn open_store(data_dir: &Path) -> TaskStore<FileStore> {
    TaskStore::load(FileStore::new(data_dir), Box::new(SystemClock))
}

fn print_status(dir: Option<&Path>) -> Result<()> {
    let data_dir = ensure_data_dir(dir)?;
    let mut store = open_store(&data_dir);
    // Persist the rollover exactly as the dashboard would
    store.flush().context("Failed to save rolled-over tasks")?;

    let summary = store.summary();
    print!("{}", report::status_report(&store.todays_tasks(), &summary, store.today()));
    Ok(())
}

fn run_tui(dir: Option<&Path>) -> Result<()> {
    let data_dir = ensure_data_dir(dir)?;
    let _log_guard = logging::init_file_logging(&data_dir)?;
    tracing::info!(dir = %data_dir.display(), "starting dashboard");

    let mut app = AppState::new(open_store(&data_dir));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.store.flush() {
        tracing::warn!(error = %format!("{:#}", e), "final save failed");
        eprintln!("Error saving state: {:#}", e);
    }
    tracing::info!("dashboard closed");

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
    }

    Ok(())
}

fn run_app<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState<S>,
) -> Result<()> {
    let poll_rate = ticker::poll_duration();
    let mut drawn_revision = None;
    let mut needs_redraw = true;

    loop {
        // Midnight crossed: stop timing and ask for a restart
        let was_day_changed = app.ui_mode == domain::UiMode::DayChanged;
        if app.check_day_changed() && !was_day_changed {
            needs_redraw = true;
        }

        // Redraw on input or when the store moved to a new snapshot
        if needs_redraw || drawn_revision != Some(app.store.revision()) {
            terminal.draw(|f| ui::render(f, app))?;
            drawn_revision = Some(app.store.revision());
            needs_redraw = false;
        }

        // Handle events with timeout for ticking
        if event::poll(poll_rate)? {
            needs_redraw = true;
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());

        // Deferred writes; failures are retried next iteration
        app.save();
    }
}
