use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use drop_four::config::AppConfig;
use drop_four::game::GameMode;
use drop_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "drop_four", about = "Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "drop_four.toml")]
    config: PathBuf,

    /// Game mode: 'single' (vs. computer) or 'two' (local two-player)
    #[arg(long, default_value = "single")]
    mode: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mode = match cli.mode.as_str() {
        "single" => GameMode::SinglePlayerVsComputer,
        "two" => GameMode::TwoPlayerLocal,
        other => bail!("unknown mode '{}' (expected 'single' or 'two')", other),
    };

    init_tracing()?;

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config, mode);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running the terminal app")
}

/// Log to a file so raw-mode terminal output stays clean.
fn init_tracing() -> Result<()> {
    let log_file = std::fs::File::create("drop_four.log").context("creating log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
