//! Computer player backed by the search engine.

use super::Player;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::{Duration, sleep};
use tracing::debug;
use xo_engine::{AnyGame, Difficulty, Player as Mark, Position, Pruning, select_move_with_pruning};

/// Pause before answering, so moves feel deliberate on screen. Purely
/// cosmetic; the search itself is synchronous and fast.
const THINK_DELAY: Duration = Duration::from_millis(300);

/// Computer player that picks moves via the tiered move selector.
pub struct EnginePlayer {
    name: String,
    mark: Mark,
    difficulty: Difficulty,
    pruning: Pruning,
    rng: StdRng,
}

impl EnginePlayer {
    /// Creates an engine player for `mark` at the given difficulty.
    ///
    /// `seed` fixes the randomness of the Easy and Medium tiers; when
    /// `None` the RNG is seeded from the OS.
    pub fn new(mark: Mark, difficulty: Difficulty, pruning: Pruning, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: format!("Engine ({difficulty})"),
            mark,
            difficulty,
            pruning,
            rng,
        }
    }
}

#[async_trait::async_trait]
impl Player for EnginePlayer {
    async fn get_move(&mut self, game: &AnyGame) -> Result<Position> {
        sleep(THINK_DELAY).await;

        let mut board = game.board().clone();
        let pos = select_move_with_pruning(
            &mut board,
            self.mark,
            self.difficulty,
            self.pruning,
            &mut self.rng,
        );
        debug!(?pos, difficulty = %self.difficulty, "Engine selected move");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_engine(&self) -> bool {
        true
    }
}
