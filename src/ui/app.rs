use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::RandomOpponent;
use crate::config::AppConfig;
use crate::engine::GameEngine;
use crate::game::{GameMode, GameOutcome, Player, COLS};

use super::frontend::{Command, CommandQueue};

/// A piece visually falling toward its landing row, advanced one row per
/// tick. The cell itself is already committed; this is presentation only.
pub struct DropAnimation {
    pub player: Player,
    pub column: usize,
    pub current_row: usize,
    pub target_row: usize,
}

pub struct App {
    engine: GameEngine<CommandQueue>,
    selected_column: usize,
    input_enabled: bool,
    animation: Option<DropAnimation>,
    computer_due_at: Option<Instant>,
    message: Option<String>,
    should_quit: bool,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &AppConfig, mode: GameMode) -> Self {
        let engine = GameEngine::new(
            mode,
            Box::new(RandomOpponent::new()),
            Duration::from_millis(config.engine.computer_move_delay_ms),
            CommandQueue::default(),
        );

        App {
            engine,
            selected_column: 3, // Start in middle
            input_enabled: true,
            animation: None,
            computer_due_at: None,
            message: None,
            should_quit: false,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.process_commands();
            self.tick();

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Drain engine requests queued since the last tick.
    fn process_commands(&mut self) {
        for command in self.engine.frontend_mut().drain() {
            match command {
                Command::PlayDrop { player, column, row } => {
                    self.animation = Some(DropAnimation {
                        player,
                        column,
                        current_row: 0,
                        target_row: row,
                    });
                }
                Command::SetInputEnabled(enabled) => {
                    self.input_enabled = enabled;
                }
                Command::GameOver(outcome) => {
                    self.message = Some(self.finish_text(outcome));
                }
                Command::ScheduleComputerMove(delay) => {
                    self.computer_due_at = Some(Instant::now() + delay);
                }
            }
        }
    }

    /// Advance the falling piece and fire the computer's deferred move.
    fn tick(&mut self) {
        let landed = match &mut self.animation {
            Some(anim) if anim.current_row < anim.target_row => {
                anim.current_row += 1;
                false
            }
            Some(_) => true,
            None => false,
        };
        if landed {
            self.animation = None;
            self.engine.drop_animation_finished();
        }

        if let Some(due) = self.computer_due_at {
            if Instant::now() >= due {
                self.computer_due_at = None;
                self.engine.computer_move_due();
            }
        }
    }

    fn finish_text(&self, outcome: GameOutcome) -> String {
        match outcome {
            GameOutcome::Winner(winner) => match self.engine.session().mode() {
                GameMode::SinglePlayerVsComputer => {
                    if winner == Player::One {
                        "You Won!".to_string()
                    } else {
                        "Computer Won!".to_string()
                    }
                }
                GameMode::TwoPlayerLocal => format!("{} Won!", winner.name()),
            },
            GameOutcome::Draw => "It's a Draw!".to_string(),
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart(self.engine.session().mode());
            }
            KeyCode::Char('m') => {
                let next = match self.engine.session().mode() {
                    GameMode::SinglePlayerVsComputer => GameMode::TwoPlayerLocal,
                    GameMode::TwoPlayerLocal => GameMode::SinglePlayerVsComputer,
                };
                self.restart(next);
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if !self.engine.session().is_running() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if !self.input_enabled {
            return;
        }

        self.message = None;
        self.engine.column_activated(self.selected_column);
    }

    fn restart(&mut self, mode: GameMode) {
        if self.animation.is_some() {
            self.message = Some("Wait for the piece to land.".to_string());
            return;
        }

        self.engine.restart(mode);
        self.computer_due_at = None;
        self.selected_column = 3;
        self.message = Some(format!("New game: {}", mode.name()));
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.engine.session(),
            self.selected_column,
            self.animation.as_ref(),
            &self.message,
            self.input_enabled,
        );
    }
}
