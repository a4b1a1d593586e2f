//! Search engine properties: pruning equivalence and board restoration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xo_engine::{Board, Player, Position, Pruning, Searcher, Square};

/// Plays `moves` random alternating moves onto a fresh board,
/// stopping early at a terminal state. Returns the board and the
/// player to move next.
fn random_position(rng: &mut StdRng, moves: usize) -> (Board, Player) {
    let mut board = Board::new();
    let mut to_move = Player::X;
    for _ in 0..moves {
        if board.winner().is_some() || board.is_full() {
            break;
        }
        let open = Position::valid_moves(&board);
        let pos = open[rng.random_range(0..open.len())];
        board.set(pos, Square::Occupied(to_move));
        to_move = to_move.opponent();
    }
    (board, to_move)
}

#[test]
fn pruned_and_unpruned_scores_agree() {
    let mut rng = StdRng::seed_from_u64(2024);
    for trial in 0..200 {
        let (mut board, to_move) = random_position(&mut rng, 2 + trial % 7);
        let maximizing = to_move == Player::O;

        let pruned = Searcher::new(Player::O).score(&mut board, maximizing);
        let unpruned =
            Searcher::with_pruning(Player::O, Pruning::Off).score(&mut board, maximizing);

        assert_eq!(
            pruned, unpruned,
            "pruning changed the score on trial {trial}: {}",
            board.display()
        );
    }
}

#[test]
fn pruned_and_unpruned_scores_agree_on_empty_board() {
    let mut board = Board::new();
    let pruned = Searcher::new(Player::X).score(&mut board, true);
    let unpruned = Searcher::with_pruning(Player::X, Pruning::Off).score(&mut board, true);
    assert_eq!(pruned, unpruned);
    assert_eq!(pruned, xo_engine::DRAW);
}

#[test]
fn search_restores_the_board() {
    let mut rng = StdRng::seed_from_u64(99);
    for trial in 0..200 {
        let (mut board, to_move) = random_position(&mut rng, trial % 9);
        let snapshot = board.clone();
        let maximizing = to_move == Player::X;

        Searcher::new(Player::X).score(&mut board, maximizing);
        assert_eq!(board, snapshot, "pruned search mutated the board");

        Searcher::with_pruning(Player::X, Pruning::Off).score(&mut board, maximizing);
        assert_eq!(board, snapshot, "unpruned search mutated the board");
    }
}

#[test]
fn best_move_restores_the_board() {
    let mut rng = StdRng::seed_from_u64(7);
    for trial in 0..100 {
        let (mut board, to_move) = random_position(&mut rng, trial % 8);
        if board.winner().is_some() || board.is_full() {
            continue;
        }
        let snapshot = board.clone();
        xo_engine::best_move(&mut board, to_move, Pruning::AlphaBeta);
        assert_eq!(board, snapshot);
    }
}

#[test]
fn empty_board_search_completes_quickly() {
    // Worst case for the unpruned engine: the full 9-cell game tree.
    let start = std::time::Instant::now();
    let mut board = Board::new();
    Searcher::with_pruning(Player::X, Pruning::Off).score(&mut board, true);
    assert!(
        start.elapsed() < std::time::Duration::from_secs(10),
        "exhaustive search took {:?}",
        start.elapsed()
    );
}
