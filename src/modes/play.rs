use std::io::{stderr, Stderr};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::interval;

use crate::game::{ConfigError, Direction, GameConfig, GameEngine, GameState, Phase};
use crate::input::{map_key, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

/// How often the scheduler offers the engine a chance to step. Much finer
/// than any sensible tick interval; the engine's elapsed-time gate decides
/// whether a logical step actually runs.
const DRIVER_INTERVAL: Duration = Duration::from_millis(16);

/// Render cadence, decoupled from the logical tick rate.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive terminal play: wires the engine to the crossterm event
/// stream, the ratatui renderer, and the tokio schedulers.
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    renderer: Renderer,
    metrics: SessionMetrics,
    pending_direction: Option<Direction>,
    paused: bool,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let mut engine = GameEngine::new(config)?;
        let state = engine.reset();
        let renderer = Renderer::new(engine.config().apples_to_win);

        Ok(Self {
            engine,
            state,
            renderer,
            metrics: SessionMetrics::new(),
            pending_direction: None,
            paused: false,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut driver = interval(DRIVER_INTERVAL);
        let mut frames = interval(FRAME_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Pausing stops the scheduling; the engine gates the rest.
                _ = driver.tick() => {
                    if !self.paused {
                        self.drive();
                    }
                }

                _ = frames.tick() => {
                    if !self.paused && self.state.is_running() {
                        self.metrics.update();
                    }
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics, self.paused);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        match map_key(key) {
            KeyAction::Steer(dir) => {
                self.pending_direction = Some(dir);
            }
            KeyAction::TogglePause => {
                if self.state.is_running() {
                    self.paused = !self.paused;
                }
            }
            KeyAction::Restart => self.restart(),
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::Ignore => {}
        }
    }

    /// One scheduler beat: apply the latched steering request, then offer
    /// the engine a tick and watch for the win edge.
    fn drive(&mut self) {
        if let Some(dir) = self.pending_direction.take() {
            self.engine.set_direction(&mut self.state, dir);
        }

        let was_won = self.state.phase == Phase::Won;
        let snapshot = self.engine.tick(&mut self.state, Instant::now());

        if snapshot.won && !was_won {
            info!("game won with {} apples", snapshot.apples_eaten);
            self.metrics.on_win();
        }
    }

    fn restart(&mut self) {
        self.state = self.engine.reset();
        self.pending_direction = None;
        self.paused = false;
        self.metrics.on_restart();
        info!("game restarted");
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
