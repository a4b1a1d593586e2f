//! Application state and logic.

use crate::orchestrator::GameEvent;
use tracing::debug;
use xo_engine::{AnyGame, Difficulty};

/// Main application state.
///
/// Holds a replica of the orchestrator's game, updated through
/// [`GameEvent`]s, plus the status line shown in the UI.
pub struct App {
    game: AnyGame,
    difficulty: Difficulty,
    status_message: String,
    game_over: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            game: AnyGame::new(),
            difficulty,
            status_message: "Your turn. Press 1-9 to place your mark.".to_string(),
            game_over: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// Gets the configured difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the current game has finished.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::EngineThinking { player } => {
                self.status_message = format!("{player} is thinking...");
            }
            GameEvent::MoveMade { player, position } => {
                match self.game.clone().place(position) {
                    Ok(next) => {
                        self.status_message = format!("{} played {}", player, position.label());
                        self.game = next;
                    }
                    Err(e) => {
                        // Replica out of step with the orchestrator.
                        self.status_message = format!("Move error: {e}");
                    }
                }
            }
            GameEvent::GameOver { winner } => {
                self.game_over = true;
                self.status_message = match winner {
                    Some(player) => {
                        format!("{player} wins! Press 'r' for a rematch or 'q' to quit.")
                    }
                    None => "It's a draw! Press 'r' for a rematch or 'q' to quit.".to_string(),
                };
            }
        }
    }

    /// Resets the replica for a new game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = AnyGame::new();
        self.game_over = false;
        self.status_message = "Rematch! Press 1-9 to place your mark.".to_string();
    }
}
