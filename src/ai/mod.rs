//! Computer opponents: the move-selection seam and its randomized
//! implementation.

mod opponent;
mod random;

pub use opponent::Opponent;
pub use random::RandomOpponent;
