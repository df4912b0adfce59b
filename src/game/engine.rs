use std::time::Instant;

use rand::rngs::ThreadRng;

use super::apple;
use super::config::{ConfigError, GameConfig};
use super::direction::Direction;
use super::grid::Grid;
use super::snake::Snake;
use super::state::{GameState, Phase, Snapshot};

/// The game engine: owns the configuration and the rng, drives the per-tick
/// state machine. All game state lives in [`GameState`] values handed out by
/// [`reset`](GameEngine::reset), so one engine can run any number of games
/// in sequence and tests can inspect or doctor the state directly.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: ThreadRng,
}

impl GameEngine {
    /// Validates the configuration up front; nothing else in the engine can
    /// fail.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height);

        Ok(Self {
            config,
            grid,
            rng: rand::thread_rng(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh game: snake laid out along the top row heading right, apple
    /// spawned once against the initial head position.
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.config.initial_snake_length);
        let apple = apple::spawn(&mut self.rng, self.grid, snake.head());

        GameState::new(snake, apple, self.grid)
    }

    /// Steering request; the snake drops 180-degree reversals.
    pub fn set_direction(&self, state: &mut GameState, dir: Direction) {
        state.snake.set_direction(dir);
    }

    /// One scheduler invocation. The caller is expected to invoke this far
    /// more often than the logical rate; a logical step only runs when the
    /// tick interval has elapsed since the last one (at most one step per
    /// invocation, no catch-up). Won games and gated invocations still
    /// report the current state.
    pub fn tick(&mut self, state: &mut GameState, now: Instant) -> Snapshot {
        if state.phase == Phase::Won {
            return state.snapshot();
        }

        if let Some(last) = state.last_step {
            if now.duration_since(last) < self.config.tick_interval() {
                return state.snapshot();
            }
        }
        state.last_step = Some(now);

        self.step(state);
        state.snapshot()
    }

    /// The ordered logical step: apple test against the pre-move head, then
    /// respawn and score, then the win check, then movement. The snake does
    /// not move on the tick that wins the game.
    fn step(&mut self, state: &mut GameState) {
        let ate = state.snake.eats(state.apple);

        if ate {
            state.apple = apple::spawn(&mut self.rng, self.grid, state.snake.head());
            state.snake.record_apple();
        }

        if state.snake.apples_eaten() >= self.config.apples_to_win {
            state.phase = Phase::Won;
            return;
        }

        state.snake.advance(self.grid, ate);
    }
}
