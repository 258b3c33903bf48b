use super::{Board, Player};

/// How the second seat is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    SinglePlayerVsComputer,
    TwoPlayerLocal,
}

impl GameMode {
    /// Whether `player` is driven by the computer in this mode.
    pub fn is_computer(self, player: Player) -> bool {
        self == GameMode::SinglePlayerVsComputer && player == Player::Two
    }

    /// Mode name for display
    pub fn name(self) -> &'static str {
        match self {
            GameMode::SinglePlayerVsComputer => "Single Player",
            GameMode::TwoPlayerLocal => "Two Players",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// One game from first move to resolution: the board, whose turn it is, the
/// mode, and whether the game is still running. Discarded or reset on
/// restart; nothing persists across sessions.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active_player: Player,
    mode: GameMode,
    is_running: bool,
}

impl GameSession {
    /// Start a fresh session. Player 1 always opens.
    pub fn new(mode: GameMode) -> Self {
        GameSession {
            board: Board::new(),
            active_player: Player::One,
            mode,
            is_running: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Hand the turn to the other player.
    pub fn switch_player(&mut self) {
        self.active_player = self.active_player.other();
    }

    /// Mark the session resolved; no further moves.
    pub fn finish(&mut self) {
        self.is_running = false;
    }

    /// Reinitialize for a new game: empty board, Player 1 to move, running.
    pub fn reset(&mut self, mode: GameMode) {
        self.board.reset();
        self.active_player = Player::One;
        self.mode = mode;
        self.is_running = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_new_session() {
        let session = GameSession::new(GameMode::TwoPlayerLocal);
        assert_eq!(session.active_player(), Player::One);
        assert!(session.is_running());
        assert_eq!(session.board().playable_columns().len(), 7);
    }

    #[test]
    fn test_switch_player() {
        let mut session = GameSession::new(GameMode::TwoPlayerLocal);
        session.switch_player();
        assert_eq!(session.active_player(), Player::Two);
        session.switch_player();
        assert_eq!(session.active_player(), Player::One);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = GameSession::new(GameMode::SinglePlayerVsComputer);
        session.board_mut().place(0, Player::One).unwrap();
        session.board_mut().place(0, Player::Two).unwrap();
        session.switch_player();
        session.finish();

        session.reset(GameMode::TwoPlayerLocal);

        assert_eq!(session.active_player(), Player::One);
        assert!(session.is_running());
        assert_eq!(session.mode(), GameMode::TwoPlayerLocal);
        for row in 0..crate::game::ROWS {
            for col in 0..crate::game::COLS {
                assert_eq!(session.board().get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_computer_seat() {
        let single = GameMode::SinglePlayerVsComputer;
        assert!(!single.is_computer(Player::One));
        assert!(single.is_computer(Player::Two));

        let local = GameMode::TwoPlayerLocal;
        assert!(!local.is_computer(Player::One));
        assert!(!local.is_computer(Player::Two));
    }
}
