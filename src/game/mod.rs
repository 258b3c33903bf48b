//! Core game logic: board representation, player identity, and the session
//! data the engine drives.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, MoveError, COLS, ROWS, WIN_LEN};
pub use player::Player;
pub use session::{GameMode, GameOutcome, GameSession};
