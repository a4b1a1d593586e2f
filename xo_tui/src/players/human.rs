//! Human player that gets input from keyboard.

use super::Player;
use anyhow::Result;
use crossterm::event::KeyCode;
use tokio::sync::mpsc;
use tracing::debug;
use xo_engine::{AnyGame, Position};

/// Human player using keyboard input.
///
/// Keys 1-9 map to board squares in row-major order. Occupied squares
/// and non-digit keys are ignored so the core never sees an invalid
/// move.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<KeyCode>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<KeyCode>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, game: &AnyGame) -> Result<Position> {
        while let Some(key) = self.input_rx.recv().await {
            let KeyCode::Char(c) = key else { continue };
            let Some(digit) = c.to_digit(10) else { continue };
            if !(1..=9).contains(&digit) {
                continue;
            }
            let pos = Position::from_index(digit as usize - 1)
                .expect("digit 1-9 maps to a board position");
            if !game.board().is_empty(pos) {
                debug!(?pos, "Ignoring move to occupied square");
                continue;
            }
            return Ok(pos);
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
