//! SpendLab TUI — single-screen interactive report on CPI and household
//! spending.
//!
//! Layout:
//! - Sidebar — year-range sliders, chart-type radio, data-table checkbox
//! - Report — summary strip, chart, statistics read-out, optional table
//! - Overlays — welcome (first run), interpretation notes, help

mod app;
mod input;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use spendlab_core::sample::sample_dataset;
use spendlab_core::{ingest, AppConfig, Dataset};

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Paths
    let app_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spendlab");
    let config_path = app_dir.join("config.toml");
    let state_path = app_dir.join("state.json");

    let (config, config_warning) = match AppConfig::load_or_default(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(format!("config: {err}"))),
    };

    // Resolve the dataset: CLI arg > config > conventional file > sample.
    let cli_path = std::env::args_os().nth(1).map(PathBuf::from);
    let (dataset, data_label, load_error) = resolve_dataset(cli_path, &config);

    // Build app state: config supplies first-run defaults, persisted UI
    // state (if any) overrides them.
    let mut app = AppState::new(dataset, data_label, state_path.clone());
    app.chart_kind = config.chart;
    app.show_table = config.show_table;

    let persisted = persistence::load(&state_path);
    persistence::apply(&mut app, persisted);

    if let Some(warning) = config_warning {
        app.set_warning(warning);
    }
    if let Some(error) = load_error {
        app.set_error(error);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Pick and load the dataset. A load failure falls back to the built-in
/// sample and carries the error message, so the report always opens.
fn resolve_dataset(
    cli_path: Option<PathBuf>,
    config: &AppConfig,
) -> (Dataset, String, Option<String>) {
    let candidate = cli_path
        .or_else(|| config.data_path.clone())
        .or_else(|| conventional_file("支出.csv"))
        .or_else(|| conventional_file("spending.csv"));

    match candidate {
        Some(path) => match ingest::load_csv(&path) {
            Ok(dataset) => {
                let label = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                (dataset, label, None)
            }
            Err(err) => (
                sample_dataset(),
                "built-in sample".into(),
                Some(format!("{err}; using built-in sample")),
            ),
        },
        None => (sample_dataset(), "built-in sample".into(), None),
    }
}

fn conventional_file(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    path.exists().then_some(path)
}
