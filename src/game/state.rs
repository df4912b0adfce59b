use std::time::Instant;

use super::grid::Grid;
use super::snake::Snake;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Lifecycle of a single game. `Won` is terminal until the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Won,
}

/// Complete game state: one snake, one apple, and the pacing stamp.
///
/// Created by [`GameEngine::reset`](super::engine::GameEngine::reset) and
/// replaced wholesale on restart. All mutation goes through the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Position,
    pub grid: Grid,
    pub phase: Phase,
    /// Instant of the last performed logical step. `None` until the first
    /// tick after a reset, which always steps.
    pub last_step: Option<Instant>,
}

impl GameState {
    pub fn new(snake: Snake, apple: Position, grid: Grid) -> Self {
        Self {
            snake,
            apple,
            grid,
            phase: Phase::Running,
            last_step: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The view handed to the collaborator layer after each tick; everything
    /// a renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            apples_eaten: self.snake.apples_eaten(),
            won: self.phase == Phase::Won,
            head: self.snake.head(),
            body: self.snake.segments().to_vec(),
            apple: self.apple,
        }
    }
}

/// Read-only view of one tick's outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub apples_eaten: u32,
    pub won: bool,
    pub head: Position,
    /// All segments, head first.
    pub body: Vec<Position>,
    pub apple: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_running() {
        let grid = Grid::new(20, 10);
        let state = GameState::new(Snake::new(3), Position::new(5, 5), grid);

        assert!(state.is_running());
        assert_eq!(state.last_step, None);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let grid = Grid::new(20, 10);
        let state = GameState::new(Snake::new(3), Position::new(5, 5), grid);
        let snap = state.snapshot();

        assert_eq!(snap.apples_eaten, 0);
        assert!(!snap.won);
        assert_eq!(snap.head, Position::new(2, 0));
        assert_eq!(
            snap.body,
            vec![
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(0, 0)
            ]
        );
        assert_eq!(snap.apple, Position::new(5, 5));
    }
}
