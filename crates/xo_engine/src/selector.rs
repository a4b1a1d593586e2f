//! Difficulty-tiered move selection.
//!
//! Easy picks a random open square, Hard runs the full search, and
//! Medium mixes the two per call: a 30% chance of a random move,
//! otherwise the search move.

use crate::position::Position;
use crate::search::{Pruning, Score, Searcher};
use crate::types::{Board, Player, Square};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Chance that a Medium-tier move is random rather than searched.
const MEDIUM_RANDOM_CHANCE: f64 = 0.3;

/// Difficulty tier controlling the move-selection policy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves; the search is never consulted.
    Easy,
    /// 30% random, 70% optimal, decided independently each turn.
    Medium,
    /// Always the optimal move; never loses.
    Hard,
}

/// Finds the best move for `mark` via exhaustive search.
///
/// Each empty square is tried in ascending index order and scored
/// with the opponent to move; ties keep the lowest-index square. The
/// board is restored before returning. Returns `None` only when the
/// board is full.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board, mark: Player, pruning: Pruning) -> Option<Position> {
    let searcher = Searcher::with_pruning(mark, pruning);
    let mut best: Option<(Position, Score)> = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(mark));
        let score = searcher.score(board, false);
        board.set(pos, Square::Empty);

        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((pos, score)),
        }
    }

    if let Some((pos, score)) = best {
        debug!(?pos, score, "Best move found");
    }
    best.map(|(pos, _)| pos)
}

/// Selects the computer's move for the given difficulty tier.
///
/// The returned position is always an empty square. The random source
/// is injected so callers can seed it for reproducible games.
///
/// # Panics
///
/// Panics if the board is full; callers must check for a terminal
/// state first.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &mut Board,
    mark: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Position {
    select_move_with_pruning(board, mark, difficulty, Pruning::AlphaBeta, rng)
}

/// [`select_move`] with an explicit pruning setting for the searched
/// tiers. Pruning never changes the chosen move, only the amount of
/// work done to find it.
///
/// # Panics
///
/// Panics if the board is full.
#[instrument(skip(board, rng))]
pub fn select_move_with_pruning<R: Rng + ?Sized>(
    board: &mut Board,
    mark: Player,
    difficulty: Difficulty,
    pruning: Pruning,
    rng: &mut R,
) -> Position {
    let open = Position::valid_moves(board);
    assert!(!open.is_empty(), "select_move called on a full board");

    match difficulty {
        Difficulty::Easy => open[rng.random_range(0..open.len())],
        Difficulty::Medium => {
            if rng.random::<f64>() < MEDIUM_RANDOM_CHANCE {
                let pos = open[rng.random_range(0..open.len())];
                debug!(?pos, "Medium tier chose a random move");
                pos
            } else {
                best_move(board, mark, pruning)
                    .expect("board with an open square has a best move")
            }
        }
        Difficulty::Hard => best_move(board, mark, pruning)
            .expect("board with an open square has a best move"),
    }
}
