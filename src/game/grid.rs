use super::direction::Direction;
use super::state::Position;

/// Grid geometry: dimensions plus wraparound arithmetic. Pure value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Euclidean remainder, so negative input wraps to the far edge.
    pub fn wrap_x(&self, x: i32) -> i32 {
        x.rem_euclid(self.width)
    }

    pub fn wrap_y(&self, y: i32) -> i32 {
        y.rem_euclid(self.height)
    }

    /// One cell in `dir` from `pos`, wrapping at the edges.
    pub fn step(&self, pos: Position, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position::new(self.wrap_x(pos.x + dx), self.wrap_y(pos.y + dy))
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_inside_grid_is_identity() {
        let grid = Grid::new(20, 10);
        assert_eq!(grid.wrap_x(0), 0);
        assert_eq!(grid.wrap_x(19), 19);
        assert_eq!(grid.wrap_y(9), 9);
    }

    #[test]
    fn test_wrap_past_the_edge() {
        let grid = Grid::new(20, 10);
        assert_eq!(grid.wrap_x(20), 0);
        assert_eq!(grid.wrap_y(10), 0);
        assert_eq!(grid.wrap_x(41), 1);
    }

    #[test]
    fn test_wrap_negative_lands_on_far_edge() {
        let grid = Grid::new(20, 10);
        assert_eq!(grid.wrap_x(-1), 19);
        assert_eq!(grid.wrap_y(-1), 9);
        assert_eq!(grid.wrap_x(-21), 19);
    }

    #[test]
    fn test_step_wraps_all_four_edges() {
        let grid = Grid::new(20, 10);

        assert_eq!(
            grid.step(Position::new(19, 4), Direction::Right),
            Position::new(0, 4)
        );
        assert_eq!(
            grid.step(Position::new(0, 4), Direction::Left),
            Position::new(19, 4)
        );
        assert_eq!(
            grid.step(Position::new(7, 0), Direction::Up),
            Position::new(7, 9)
        );
        assert_eq!(
            grid.step(Position::new(7, 9), Direction::Down),
            Position::new(7, 0)
        );
    }

    #[test]
    fn test_step_inside_grid() {
        let grid = Grid::new(20, 10);
        assert_eq!(
            grid.step(Position::new(5, 5), Direction::Right),
            Position::new(6, 5)
        );
        assert_eq!(
            grid.step(Position::new(5, 5), Direction::Up),
            Position::new(5, 4)
        );
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(20, 10);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(19, 9)));
        assert!(!grid.contains(Position::new(20, 0)));
        assert!(!grid.contains(Position::new(0, 10)));
        assert!(!grid.contains(Position::new(-1, 0)));
    }
}
