//! Terminal client entry point.
//!
//! Runs interactively in raw mode, or headless with `--keys`, in which case
//! the keys are played in order and the final frame is printed to stdout.
//! Logs go to stderr.
mod app;
mod config;
mod input;
mod level;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing_subscriber::EnvFilter;
use vimrogue_core::ItemCatalog;

use app::{App, Mode};
use config::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "vimrogue", version, about = "A roguelike played with vim keystrokes")]
struct Args {
    /// Level file to play (defaults to the built-in level).
    #[arg(long)]
    level: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play these keys without a terminal and print the final frame.
    /// `\n` submits a command line, `\x1b` cancels.
    #[arg(long)]
    keys: Option<String>,

    /// Every pending keystroke costs a turn.
    #[arg(long)]
    keystroke_turns: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let mut config = CliConfig::from_env();
    if args.config.is_some() {
        config.config_path = args.config.clone();
    }
    let mut config = config.load_file()?;
    if args.level.is_some() {
        config.level_path = args.level.clone();
    }
    if args.keystroke_turns {
        config.game.keystroke_costs_turn = true;
    }

    setup_logging(&config.log_filter())?;

    let items = ItemCatalog::standard();
    let mut level = level::load(config.level_path.as_deref(), &items, &config.game)?;
    level
        .state
        .entities
        .player
        .abilities
        .extend(config.abilities.iter().cloned());
    let app = App::new(level, items, config.game.clone());

    match args.keys {
        Some(keys) => run_script(app, &keys),
        None => run_interactive(app),
    }
}

fn setup_logging(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|error| anyhow::anyhow!(error))?;
    tracing::info!(%filter, "logging initialized");
    Ok(())
}

fn run_script(mut app: App, keys: &str) -> Result<()> {
    for key in input::script(keys) {
        if !app.is_running() {
            break;
        }
        app.handle(key);
    }
    let mut stdout = io::stdout().lock();
    for line in render::frame_lines(&app) {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

fn run_interactive(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    while app.is_running() {
        render::draw(&mut stdout, &app)?;
        if let Event::Key(key) = event::read()? {
            let input = match app.mode() {
                Mode::Normal => input::normalize(key),
                Mode::Line(_) => input::normalize_line(key),
            };
            app.handle(input);
        }
    }
    Ok(())
}

/// Restores the terminal even when the loop exits with an error.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
