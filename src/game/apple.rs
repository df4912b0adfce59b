use rand::Rng;

use super::grid::Grid;
use super::state::Position;

/// Respawn policy: per-axis rejection against `forbidden`.
///
/// Each coordinate is sampled uniformly and independently until it differs
/// from the matching coordinate of `forbidden`. The result never shares a
/// row or a column with `forbidden`; it can still land on any other
/// occupied cell, since the snake body is not consulted.
///
/// Requires both grid dimensions to be at least 2, which configuration
/// validation enforces before an engine exists.
pub fn spawn<R: Rng>(rng: &mut R, grid: Grid, forbidden: Position) -> Position {
    let mut x = rng.gen_range(0..grid.width);
    while x == forbidden.x {
        x = rng.gen_range(0..grid.width);
    }

    let mut y = rng.gen_range(0..grid.height);
    while y == forbidden.y {
        y = rng.gen_range(0..grid.height);
    }

    Position::new(x, y)
}
