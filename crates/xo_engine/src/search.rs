//! Exhaustive adversarial search over tic-tac-toe positions.
//!
//! The engine is a plain recursive minimax with optional alpha-beta
//! cutoffs. Scores are game-theoretic values from the maximizer's
//! point of view: +1 win, 0 draw, -1 loss. No depth tie-breaking and
//! no memoization; the 3x3 domain is small enough to search from
//! scratch on every call.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Game-theoretic value of a position: -1, 0, or +1.
pub type Score = i8;

/// The maximizer wins.
pub const WIN: Score = 1;
/// The game is drawn under optimal play.
pub const DRAW: Score = 0;
/// The minimizer wins.
pub const LOSS: Score = -1;

/// Whether alpha-beta cutoffs are applied during search.
///
/// Pruning is a pure optimization: both variants return identical
/// scores for every input, pruning only skips branches that cannot
/// change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Cut off branches once `alpha >= beta`.
    #[default]
    AlphaBeta,
    /// Visit every branch.
    Off,
}

/// Minimax searcher with a fixed maximizing player.
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    maximizer: Player,
    pruning: Pruning,
}

impl Searcher {
    /// Creates a searcher maximizing for `maximizer`, with pruning on.
    pub fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            pruning: Pruning::AlphaBeta,
        }
    }

    /// Creates a searcher with an explicit pruning setting.
    pub fn with_pruning(maximizer: Player, pruning: Pruning) -> Self {
        Self { maximizer, pruning }
    }

    /// Returns the maximizing player.
    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Scores the position with `maximizing` indicating whose turn it is.
    ///
    /// The board is mutated in place while exploring lines but is
    /// restored to its input state before this returns; callers keep
    /// ownership of the authoritative board.
    #[instrument(skip(self, board))]
    pub fn score(&self, board: &mut Board, maximizing: bool) -> Score {
        // Scores never leave [-1, 1], so +/-2 are unreachable bounds.
        self.minimax(board, maximizing, LOSS - 1, WIN + 1)
    }

    fn minimax(
        &self,
        board: &mut Board,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        // Terminal checks in fixed priority order keep the result
        // deterministic even for unreachable double-win boards.
        if rules::wins(board, self.maximizer) {
            return WIN;
        }
        if rules::wins(board, self.maximizer.opponent()) {
            return LOSS;
        }
        if rules::is_full(board) {
            return DRAW;
        }

        let to_move = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = if maximizing { LOSS - 1 } else { WIN + 1 };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(to_move));
            let score = self.minimax(board, !maximizing, alpha, beta);
            board.set(pos, Square::Empty);

            if maximizing {
                best = best.max(score);
                if self.pruning == Pruning::AlphaBeta {
                    alpha = alpha.max(best);
                    if alpha >= beta {
                        break;
                    }
                }
            } else {
                best = best.min(score);
                if self.pruning == Pruning::AlphaBeta {
                    beta = beta.min(best);
                    if alpha >= beta {
                        break;
                    }
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: &mut Board, player: Player, positions: &[Position]) {
        for &pos in positions {
            board.set(pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_won_board_scores_win() {
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::O,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        let searcher = Searcher::new(Player::O);
        assert_eq!(searcher.score(&mut board, false), WIN);
    }

    #[test]
    fn test_lost_board_scores_loss() {
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::X,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        let searcher = Searcher::new(Player::O);
        assert_eq!(searcher.score(&mut board, true), LOSS);
    }

    #[test]
    fn test_empty_board_is_drawn() {
        // Canonical minimax check: perfect play from both sides draws.
        let mut board = Board::new();
        let searcher = Searcher::new(Player::X);
        assert_eq!(searcher.score(&mut board, true), DRAW);
    }

    #[test]
    fn test_empty_board_drawn_without_pruning() {
        let mut board = Board::new();
        let searcher = Searcher::with_pruning(Player::X, Pruning::Off);
        assert_eq!(searcher.score(&mut board, true), DRAW);
    }

    #[test]
    fn test_forced_win_one_move_away() {
        // O O _ / X X _ / _ _ _ with O to move: O completes the row.
        let mut board = Board::new();
        occupy(&mut board, Player::O, &[Position::TopLeft, Position::TopCenter]);
        occupy(&mut board, Player::X, &[Position::MiddleLeft, Position::Center]);
        let searcher = Searcher::new(Player::O);
        assert_eq!(searcher.score(&mut board, true), WIN);
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::new();
        occupy(&mut board, Player::X, &[Position::Center]);
        occupy(&mut board, Player::O, &[Position::TopLeft]);
        let snapshot = board.clone();

        let searcher = Searcher::new(Player::O);
        searcher.score(&mut board, false);
        assert_eq!(board, snapshot);

        let unpruned = Searcher::with_pruning(Player::O, Pruning::Off);
        unpruned.score(&mut board, false);
        assert_eq!(board, snapshot);
    }
}
