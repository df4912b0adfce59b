//! Wraparound Snake for the terminal.
//!
//! The crate is split the same way the game is: [`game`] holds the whole
//! state-machine core (grid, snake, apple policy, engine) and never touches
//! I/O, while [`input`], [`render`], [`metrics`] and [`modes`] are the
//! collaborator layer that schedules ticks and draws frames.

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
