//! The turn-driving state machine: validates column activations, commits
//! placements, suspends while the front end animates the drop, and on
//! resumption checks for a win and advances the turn — scheduling a deferred
//! computer move in single-player mode.

mod frontend;

pub use frontend::Frontend;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::ai::Opponent;
use crate::game::{GameMode, GameOutcome, GameSession, Player};

/// Where the engine is in the click → animate → resolve cycle. Kept as an
/// explicit field so transitions are never inferred from booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Interactive turn; a column activation is accepted.
    AwaitingInput,
    /// A placement is committed and its drop animation is in flight. No
    /// other state mutation until the front end reports completion.
    Animating {
        player: Player,
        column: usize,
        row: usize,
    },
    /// The session resolved; only restart leaves this phase.
    Resolved,
}

pub struct GameEngine<F: Frontend> {
    session: GameSession,
    phase: Phase,
    computer_move_pending: bool,
    computer_move_delay: Duration,
    opponent: Box<dyn Opponent>,
    frontend: F,
}

impl<F: Frontend> GameEngine<F> {
    pub fn new(
        mode: GameMode,
        opponent: Box<dyn Opponent>,
        computer_move_delay: Duration,
        frontend: F,
    ) -> Self {
        GameEngine {
            session: GameSession::new(mode),
            phase: Phase::AwaitingInput,
            computer_move_pending: false,
            computer_move_delay,
            opponent,
            frontend,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    /// A column was clicked. Ignored unless the engine is awaiting input,
    /// the session is running, no computer move is pending, and the column
    /// has room. On acceptance input is disabled board-wide before the drop
    /// begins, so a second click cannot race the animation.
    pub fn column_activated(&mut self, column: usize) {
        if self.phase != Phase::AwaitingInput || !self.session.is_running() {
            return;
        }
        if self.computer_move_pending {
            return;
        }
        if !self.session.board().is_column_playable(column) {
            debug!(column, "activation ignored, column not playable");
            return;
        }

        self.frontend.set_input_enabled(false);
        self.begin_drop(column);
    }

    /// The front end finished animating the in-flight drop. Runs win
    /// detection at the landing cell for its owner, then resolves the game
    /// or hands the turn over. Ignored when no drop is in flight.
    pub fn drop_animation_finished(&mut self) {
        let Phase::Animating { player, column, row } = self.phase else {
            return;
        };

        if self.session.board().is_winning_move(row, column, player) {
            self.resolve(GameOutcome::Winner(player));
            return;
        }
        if self.session.board().is_full() {
            self.resolve(GameOutcome::Draw);
            return;
        }

        self.session.switch_player();
        self.phase = Phase::AwaitingInput;

        let next = self.session.active_player();
        if self.session.mode().is_computer(next) {
            // Input stays disabled for the computer's whole turn.
            self.computer_move_pending = true;
            self.frontend.schedule_computer_move(self.computer_move_delay);
            debug!(delay_ms = self.computer_move_delay.as_millis() as u64, "computer move scheduled");
        } else {
            self.frontend.set_input_enabled(true);
        }
    }

    /// The deferred computer move became due. Ignored unless one is actually
    /// pending and the session is still interactive — a deferral that
    /// outlives a restart must not place a piece.
    pub fn computer_move_due(&mut self) {
        if !self.computer_move_pending {
            return;
        }
        self.computer_move_pending = false;

        if self.phase != Phase::AwaitingInput || !self.session.is_running() {
            return;
        }

        let Some(column) = self.opponent.choose_column(self.session.board()) else {
            warn!("computer move skipped, no playable column");
            return;
        };
        if !self.session.board().is_column_playable(column) {
            warn!(column, "opponent chose an unplayable column, move skipped");
            return;
        }

        self.begin_drop(column);
    }

    /// Start a new game. Valid from `AwaitingInput` or `Resolved`; a restart
    /// while a drop is animating is rejected.
    pub fn restart(&mut self, mode: GameMode) {
        if matches!(self.phase, Phase::Animating { .. }) {
            warn!("restart rejected while a drop is animating");
            return;
        }

        info!(mode = mode.name(), "session restarted");
        self.session.reset(mode);
        self.phase = Phase::AwaitingInput;
        self.computer_move_pending = false;
        self.frontend.set_input_enabled(true);
    }

    fn begin_drop(&mut self, column: usize) {
        let player = self.session.active_player();
        let Ok(row) = self.session.board_mut().place(column, player) else {
            return;
        };

        debug!(player = player.name(), column, row, "piece placed");
        self.phase = Phase::Animating { player, column, row };
        self.frontend.play_drop_animation(player, column, row);
    }

    fn resolve(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(winner) => info!(winner = winner.name(), "game over"),
            GameOutcome::Draw => info!("game over, draw"),
        }
        self.phase = Phase::Resolved;
        self.session.finish();
        self.frontend.notify_game_over(outcome);
    }
}
