use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::Board;

use super::opponent::Opponent;

/// An opponent that picks uniformly at random among playable columns.
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new() -> Self {
        RandomOpponent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    pub fn from_seed(seed: u64) -> Self {
        RandomOpponent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose_column(&mut self, board: &Board) -> Option<usize> {
        let columns = board.playable_columns();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, COLS, ROWS};

    #[test]
    fn test_random_opponent_only_picks_playable_columns() {
        let mut opponent = RandomOpponent::from_seed(42);
        let mut board = Board::new();
        // Fill a couple of columns entirely
        for _ in 0..ROWS {
            board.place(0, Player::One).unwrap();
            board.place(4, Player::Two).unwrap();
        }
        let playable = board.playable_columns();

        for _ in 0..100 {
            let col = opponent.choose_column(&board).unwrap();
            assert!(playable.contains(&col), "column {} is not playable", col);
        }
    }

    #[test]
    fn test_random_opponent_skips_full_board() {
        let mut opponent = RandomOpponent::from_seed(42);
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.place(col, Player::One).unwrap();
            }
        }

        assert_eq!(opponent.choose_column(&board), None);
    }

    #[test]
    fn test_random_opponent_finds_last_slot() {
        let mut opponent = RandomOpponent::from_seed(42);
        let mut board = Board::new();
        for col in 0..COLS {
            let limit = if col == 5 { ROWS - 1 } else { ROWS };
            for _ in 0..limit {
                board.place(col, Player::One).unwrap();
            }
        }

        assert_eq!(opponent.choose_column(&board), Some(5));
    }

    #[test]
    fn test_random_opponent_name() {
        let opponent = RandomOpponent::new();
        assert_eq!(opponent.name(), "Random");
    }
}
