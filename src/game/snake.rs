use super::direction::Direction;
use super::grid::Grid;
use super::state::Position;

/// The snake: ordered body segments with the head at index 0.
///
/// Segments are allowed to overlap. The game never tests the head against
/// the body, so a snake crossing itself keeps running.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: Vec<Position>,
    direction: Direction,
    apples_eaten: u32,
}

impl Snake {
    /// Lay out `length` segments along the top row: head at
    /// `(length - 1, 0)`, x decreasing toward the tail at the origin,
    /// travelling right.
    pub fn new(length: usize) -> Self {
        let length = length as i32;
        let segments = (0..length).map(|i| Position::new(length - 1 - i, 0)).collect();

        Self {
            segments,
            direction: Direction::Right,
            apples_eaten: 0,
        }
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// All segments, head first.
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn apples_eaten(&self) -> u32 {
        self.apples_eaten
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Steering request. A 180-degree reversal is ignored; any other
    /// direction takes effect immediately, ahead of the next advance.
    pub fn set_direction(&mut self, dir: Direction) {
        if !self.direction.is_opposite(dir) {
            self.direction = dir;
        }
    }

    /// Shift-queue movement: push the wrapped new head, drop the tail unless
    /// this step grows the snake. Every non-head segment ends up where its
    /// predecessor was.
    pub fn advance(&mut self, grid: Grid, grow: bool) {
        let new_head = grid.step(self.head(), self.direction);
        self.segments.insert(0, new_head);

        if !grow {
            self.segments.pop();
        }
    }

    /// Head-on-apple test, exact cell equality on both axes.
    pub fn eats(&self, apple: Position) -> bool {
        self.head() == apple
    }

    pub fn record_apple(&mut self) {
        self.apples_eaten += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let snake = Snake::new(3);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(2, 0));
        assert_eq!(
            snake.segments(),
            &[
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(0, 0)
            ]
        );
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.apples_eaten(), 0);
    }

    #[test]
    fn test_longer_initial_layout() {
        let snake = Snake::new(5);
        assert_eq!(snake.head(), Position::new(4, 0));
        assert_eq!(snake.segments()[4], Position::new(0, 0));
    }

    #[test]
    fn test_advance_preserves_length_and_shifts_body() {
        let grid = Grid::new(20, 10);
        let mut snake = Snake::new(3);

        snake.advance(grid, false);

        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.segments(),
            &[
                Position::new(3, 0),
                Position::new(2, 0),
                Position::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_advance_with_growth_keeps_tail() {
        let grid = Grid::new(20, 10);
        let mut snake = Snake::new(3);

        snake.advance(grid, true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(3, 0));
        assert_eq!(snake.segments()[3], Position::new(0, 0));
    }

    #[test]
    fn test_advance_wraps_in_all_four_directions() {
        let grid = Grid::new(20, 10);

        let mut right = Snake::new(20);
        assert_eq!(right.head(), Position::new(19, 0));
        right.advance(grid, false);
        assert_eq!(right.head(), Position::new(0, 0));

        let mut up = Snake::new(3);
        up.set_direction(Direction::Up);
        up.advance(grid, false);
        assert_eq!(up.head(), Position::new(2, 9));

        let mut down = Snake::new(3);
        down.set_direction(Direction::Down);
        for _ in 0..10 {
            down.advance(grid, false);
        }
        assert_eq!(down.head(), Position::new(2, 0));

        // Left wrap: steer away from Right first, since a direct reversal
        // is filtered.
        let mut left = Snake::new(3);
        left.set_direction(Direction::Down);
        left.advance(grid, false);
        left.set_direction(Direction::Left);
        for _ in 0..3 {
            left.advance(grid, false);
        }
        assert_eq!(left.head(), Position::new(19, 1));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = Snake::new(3);

        snake.set_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);

        snake.set_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
        snake.set_direction(Direction::Down);
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_turn_applies_before_next_advance() {
        let grid = Grid::new(20, 10);
        let mut snake = Snake::new(3);

        snake.set_direction(Direction::Down);
        snake.advance(grid, false);

        assert_eq!(snake.head(), Position::new(2, 1));
    }

    #[test]
    fn test_self_overlap_is_permitted() {
        let grid = Grid::new(5, 5);
        let mut snake = Snake::new(5);

        // A tight clockwise hook: the fourth step lands the head on a cell
        // the body still occupies.
        snake.set_direction(Direction::Down);
        snake.advance(grid, false);
        snake.set_direction(Direction::Left);
        snake.advance(grid, false);
        snake.set_direction(Direction::Up);
        snake.advance(grid, false);

        assert_eq!(snake.head(), Position::new(3, 0));
        assert_eq!(snake.len(), 5);
        let dups = snake
            .segments()
            .iter()
            .filter(|p| **p == Position::new(3, 0))
            .count();
        assert_eq!(dups, 2);
    }

    #[test]
    fn test_eats_exact_cell_only() {
        let snake = Snake::new(3);

        assert!(snake.eats(Position::new(2, 0)));
        assert!(!snake.eats(Position::new(2, 1)));
        assert!(!snake.eats(Position::new(1, 0)));
    }

    #[test]
    fn test_record_apple() {
        let mut snake = Snake::new(3);
        snake.record_apple();
        snake.record_apple();
        assert_eq!(snake.apples_eaten(), 2);
    }
}
