//! Tic-tac-toe game logic with adversarial search.
//!
//! The crate is a pure, synchronous computation library: it performs
//! no I/O and keeps no state between calls. Presentation front ends
//! own their board, call into the rules and the move selector, and
//! apply the returned move themselves.
//!
//! # Architecture
//!
//! - **Board model** ([`Board`], [`Position`], [`Player`], [`Square`])
//! - **Rules**: win and draw evaluation ([`rules`])
//! - **Search**: minimax with optional alpha-beta pruning ([`Searcher`])
//! - **Selector**: difficulty-tiered move choice ([`select_move`])
//! - **Game**: typestate state machine for a session ([`Game`], [`AnyGame`])
//!
//! # Example
//!
//! ```
//! use xo_engine::{AnyGame, Difficulty, Player, Position, select_move};
//!
//! let mut rng = rand::rng();
//! let game = AnyGame::new();
//! // Human (X) takes the center.
//! let game = game.place(Position::Center)?;
//! // Computer (O) answers at Hard difficulty.
//! let mut board = game.board().clone();
//! let reply = select_move(&mut board, Player::O, Difficulty::Hard, &mut rng);
//! let game = game.place(reply)?;
//! assert!(!game.is_over());
//! # Ok::<(), xo_engine::PlaceError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod search;
mod selector;
mod types;

pub use game::{AnyGame, Draw, Game, GameTransition, InProgress, PlaceError, Won};
pub use position::Position;
pub use search::{DRAW, LOSS, Pruning, Score, Searcher, WIN};
pub use selector::{Difficulty, best_move, select_move, select_move_with_pruning};
pub use types::{Board, Player, Square};
