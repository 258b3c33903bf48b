use std::collections::VecDeque;
use std::time::Duration;

use crate::engine::Frontend;
use crate::game::{GameOutcome, Player};

/// One engine -> UI request, queued until the app's next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PlayDrop {
        player: Player,
        column: usize,
        row: usize,
    },
    SetInputEnabled(bool),
    GameOver(GameOutcome),
    ScheduleComputerMove(Duration),
}

/// `Frontend` implementation for the terminal app. The app owns the engine
/// and also plays the collaborator role, so engine requests are buffered
/// here and drained once per tick instead of calling back into the app.
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: VecDeque<Command>,
}

impl CommandQueue {
    pub fn drain(&mut self) -> Vec<Command> {
        self.commands.drain(..).collect()
    }
}

impl Frontend for CommandQueue {
    fn play_drop_animation(&mut self, player: Player, column: usize, row: usize) {
        self.commands.push_back(Command::PlayDrop { player, column, row });
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.commands.push_back(Command::SetInputEnabled(enabled));
    }

    fn notify_game_over(&mut self, outcome: GameOutcome) {
        self.commands.push_back(Command::GameOver(outcome));
    }

    fn schedule_computer_move(&mut self, delay: Duration) {
        self.commands.push_back(Command::ScheduleComputerMove(delay));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_drain_in_order() {
        let mut queue = CommandQueue::default();
        queue.set_input_enabled(false);
        queue.play_drop_animation(Player::One, 3, 5);

        assert_eq!(
            queue.drain(),
            vec![
                Command::SetInputEnabled(false),
                Command::PlayDrop { player: Player::One, column: 3, row: 5 },
            ]
        );
        assert!(queue.drain().is_empty());
    }
}
