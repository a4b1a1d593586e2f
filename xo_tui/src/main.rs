//! Terminal front end for the tic-tac-toe search engine.
//!
//! The TUI owns its copy of the game state, renders the board, collects
//! the human move, and asks the engine crate for the computer's reply.

#![warn(missing_docs)]

mod app;
mod orchestrator;
mod players;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use xo_engine::{Difficulty, Player as Mark, Pruning};

use app::App;
use orchestrator::{GameEvent, Orchestrator};
use players::{EnginePlayer, HumanPlayer, Player};

/// Play tic-tac-toe against the search engine.
#[derive(Parser, Debug)]
#[command(name = "xo_tui")]
#[command(about = "Play tic-tac-toe against the search engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Difficulty tier: easy, medium, or hard
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Mark to play as (x moves first): x or o
    #[arg(short, long, default_value = "x", value_parser = parse_mark)]
    mark: Mark,

    /// Seed for the Easy/Medium random branches, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Search every branch instead of using alpha-beta cutoffs
    #[arg(long)]
    no_prune: bool,
}

fn parse_mark(s: &str) -> Result<Mark, String> {
    match s.to_ascii_lowercase().as_str() {
        "x" => Ok(Mark::X),
        "o" => Ok(Mark::O),
        other => Err(format!("invalid mark '{other}', expected 'x' or 'o'")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file; the TUI owns the terminal.
    let log_file = std::fs::File::create("xo_tui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(
        difficulty = %cli.difficulty,
        mark = %cli.mark,
        seed = ?cli.seed,
        no_prune = cli.no_prune,
        "Starting tic-tac-toe TUI"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &cli).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Spawns an orchestrator task for one game and returns its handle
/// together with the keyboard channel feeding the human player.
fn spawn_game(
    cli: &Cli,
    event_tx: mpsc::UnboundedSender<GameEvent>,
) -> (JoinHandle<()>, mpsc::UnboundedSender<KeyCode>) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    let pruning = if cli.no_prune {
        Pruning::Off
    } else {
        Pruning::AlphaBeta
    };
    let human = Box::new(HumanPlayer::new("You", input_rx));
    let engine = Box::new(EnginePlayer::new(
        cli.mark.opponent(),
        cli.difficulty,
        pruning,
        cli.seed,
    ));
    let (player_x, player_o): (Box<dyn Player>, Box<dyn Player>) = if cli.mark == Mark::X {
        (human, engine)
    } else {
        (engine, human)
    };

    let handle = tokio::spawn(async move {
        let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx);
        if let Err(e) = orchestrator.run().await {
            warn!(error = %e, "Game ended with error");
        }
    });

    (handle, input_tx)
}

/// Main UI loop: render, drain orchestrator events, forward keys.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    cli: &Cli,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut app = App::new(cli.difficulty);
    let (mut game_task, mut input_tx) = spawn_game(cli, event_tx.clone());

    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        info!("User quit");
                        game_task.abort();
                        return Ok(());
                    }
                    KeyCode::Char('r') if app.game_over() => {
                        info!("Rematch requested");
                        game_task.abort();
                        app.restart();
                        let (task, tx) = spawn_game(cli, event_tx.clone());
                        game_task = task;
                        input_tx = tx;
                    }
                    code => {
                        let _ = input_tx.send(code);
                    }
                }
            }
        }
    }
}
