//! Typestate-based game state machine for tic-tac-toe.
//!
//! The game phase is encoded in a type parameter so that finished
//! games cannot accept moves. Presentation adapters hold the erased
//! [`AnyGame`] wrapper and drive it one move at a time.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::instrument;

/// Typestate marker: Game is in progress.
#[derive(Debug, Clone, Copy)]
pub struct InProgress;

/// Typestate marker: Game ended in a win.
#[derive(Debug, Clone, Copy)]
pub struct Won;

/// Typestate marker: Game ended in a draw.
#[derive(Debug, Clone, Copy)]
pub struct Draw;

/// Game state with typestate phase encoding.
///
/// - `Game<InProgress>` accepts moves via [`Game::place`]
/// - `Game<Won>` exposes [`Game::winner`]
/// - `Game<Draw>` only exposes board access
#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board,
    to_move: Player,
    winner: Option<Player>,
    history: Vec<Position>,
    _state: PhantomData<S>,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug)]
pub enum GameTransition {
    /// Game continues with next player.
    InProgress(Game<InProgress>),
    /// Game ended with a winner.
    Won(Game<Won>),
    /// Game ended in a draw.
    Draw(Game<Draw>),
}

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    /// Square is already occupied.
    SquareOccupied,
    /// The game has already finished.
    GameOver,
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceError::SquareOccupied => write!(f, "Square is already occupied"),
            PlaceError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for PlaceError {}

impl Game<InProgress> {
    /// Creates a new game in progress. X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            winner: None,
            history: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Places a mark at the given position, consuming the game and
    /// returning a transition.
    ///
    /// # Errors
    ///
    /// Returns `PlaceError::SquareOccupied` if the position is already
    /// occupied.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.to_move))]
    pub fn place(mut self, pos: Position) -> Result<GameTransition, PlaceError> {
        if !self.board.is_empty(pos) {
            return Err(PlaceError::SquareOccupied);
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);

        if let Some(winner) = rules::check_winner(&self.board) {
            return Ok(GameTransition::Won(Game {
                board: self.board,
                to_move: self.to_move,
                winner: Some(winner),
                history: self.history,
                _state: PhantomData::<Won>,
            }));
        }

        if rules::is_full(&self.board) {
            return Ok(GameTransition::Draw(Game {
                board: self.board,
                to_move: self.to_move,
                winner: None,
                history: self.history,
                _state: PhantomData::<Draw>,
            }));
        }

        Ok(GameTransition::InProgress(Game {
            board: self.board,
            to_move: self.to_move.opponent(),
            winner: None,
            history: self.history,
            _state: PhantomData::<InProgress>,
        }))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }
}

impl Default for Game<InProgress> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }
}

impl Game<Won> {
    /// Returns the winner of the game.
    pub fn winner(&self) -> Player {
        self.winner.expect("Won game must have winner")
    }
}

/// Phase-erased game wrapper for presentation adapters.
///
/// Typestate phases can't be stored in one field or serialized, so
/// adapters hold this enum and let it dispatch to the typestate
/// machine underneath.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnyGame {
    /// Game in progress.
    InProgress {
        /// The board state.
        board: Board,
        /// Current player to move.
        to_move: Player,
        /// Move history.
        history: Vec<Position>,
    },
    /// Game ended with winner.
    Won {
        /// The board state.
        board: Board,
        /// The winner.
        winner: Player,
        /// Move history.
        history: Vec<Position>,
    },
    /// Game ended in draw.
    Draw {
        /// The board state.
        board: Board,
        /// Move history.
        history: Vec<Position>,
    },
}

impl From<GameTransition> for AnyGame {
    fn from(transition: GameTransition) -> Self {
        match transition {
            GameTransition::InProgress(game) => AnyGame::InProgress {
                to_move: game.to_move,
                board: game.board,
                history: game.history,
            },
            GameTransition::Won(game) => AnyGame::Won {
                winner: game.winner.expect("Won game must have winner"),
                board: game.board,
                history: game.history,
            },
            GameTransition::Draw(game) => AnyGame::Draw {
                board: game.board,
                history: game.history,
            },
        }
    }
}

impl From<Game<InProgress>> for AnyGame {
    fn from(game: Game<InProgress>) -> Self {
        AnyGame::InProgress {
            to_move: game.to_move,
            board: game.board,
            history: game.history,
        }
    }
}

impl AnyGame {
    /// Creates a fresh in-progress game.
    pub fn new() -> Self {
        Game::<InProgress>::new().into()
    }

    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::InProgress { board, .. } => board,
            AnyGame::Won { board, .. } => board,
            AnyGame::Draw { board, .. } => board,
        }
    }

    /// Returns the move history for any game phase.
    pub fn history(&self) -> &[Position] {
        match self {
            AnyGame::InProgress { history, .. } => history,
            AnyGame::Won { history, .. } => history,
            AnyGame::Draw { history, .. } => history,
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        !matches!(self, AnyGame::InProgress { .. })
    }

    /// Returns the current player to move, if game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyGame::InProgress { to_move, .. } => Some(*to_move),
            _ => None,
        }
    }

    /// Returns the winner, if game is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            AnyGame::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyGame::InProgress { to_move, .. } => {
                format!("In progress. Player {} to move.", to_move)
            }
            AnyGame::Won { winner, .. } => format!("Game over. Player {} wins!", winner),
            AnyGame::Draw { .. } => "Game over. Draw!".to_string(),
        }
    }

    /// Makes a move, returning the next phase.
    ///
    /// # Errors
    ///
    /// Returns `PlaceError::GameOver` when the game has finished and
    /// `PlaceError::SquareOccupied` for an occupied square. The call
    /// consumes `self`; adapters that want to keep the old state on
    /// error should clone first.
    #[instrument(skip(self))]
    pub fn place(self, pos: Position) -> Result<Self, PlaceError> {
        match self {
            AnyGame::InProgress {
                board,
                to_move,
                history,
            } => {
                let game = Game::<InProgress> {
                    board,
                    to_move,
                    winner: None,
                    history,
                    _state: PhantomData,
                };
                Ok(game.place(pos)?.into())
            }
            AnyGame::Won { .. } | AnyGame::Draw { .. } => Err(PlaceError::GameOver),
        }
    }
}

impl Default for AnyGame {
    fn default() -> Self {
        Self::new()
    }
}
