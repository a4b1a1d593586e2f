//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use xo_engine::{AnyGame, Position};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// The returned position references an empty square on the
    /// game's board.
    async fn get_move(&mut self, game: &AnyGame) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether this player is computer-driven (used for "thinking"
    /// notifications in the UI).
    fn is_engine(&self) -> bool {
        false
    }
}
