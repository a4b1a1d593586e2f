//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use xo_engine::{AnyGame, Player as Mark, Position};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Engine is thinking.
    EngineThinking {
        /// Display name of the thinking player.
        player: String,
    },
    /// Move was made.
    MoveMade {
        /// Display name of the player who moved.
        player: String,
        /// Square the mark was placed on.
        position: Position,
    },
    /// Game ended.
    GameOver {
        /// Winner's display name, `None` for a draw.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
///
/// Owns the authoritative game state for the session; the UI keeps a
/// replica it updates from [`GameEvent`]s.
pub struct Orchestrator {
    game: AnyGame,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: AnyGame::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Runs the game loop until the game ends.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            player_x = %self.player_x.name(),
            player_o = %self.player_o.name(),
            "Starting game"
        );

        loop {
            let Some(to_move) = self.game.to_move() else {
                let winner = self.game.winner().map(|mark| {
                    if mark == Mark::X {
                        self.player_x.name().to_string()
                    } else {
                        self.player_o.name().to_string()
                    }
                });
                info!(?winner, "Game over");
                self.event_tx.send(GameEvent::GameOver { winner })?;
                return Ok(());
            };

            let player = if to_move == Mark::X {
                &mut self.player_x
            } else {
                &mut self.player_o
            };
            let player_name = player.name().to_string();

            if player.is_engine() {
                self.event_tx.send(GameEvent::EngineThinking {
                    player: player_name.clone(),
                })?;
            }

            debug!(player = %player_name, ?to_move, "Waiting for move");
            let position = player.get_move(&self.game).await?;

            match self.game.clone().place(position) {
                Ok(next) => self.game = next,
                Err(e) => {
                    // Players validate against the board first, so this
                    // is unexpected; keep the old state and re-prompt.
                    warn!(error = %e, ?position, "Rejected move");
                    continue;
                }
            }

            self.event_tx.send(GameEvent::MoveMade {
                player: player_name,
                position,
            })?;
        }
    }
}
