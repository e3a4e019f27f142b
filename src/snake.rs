use std::collections::VecDeque;

use crate::Coords;
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    fn offset(self) -> (i16, i16) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// Plain step, the old tail cell is free again.
    Moved { new_head: Coords, old_tail: Coords },
    /// Head landed on the food, nothing was dropped from the tail.
    Ate { new_head: Coords },
    Crashed
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    // Head at the front.
    body: VecDeque<Coords>,
    direction: Direction,
}

impl Snake {
    pub fn new(head: Coords, direction: Direction) -> Self {
        Snake { body: VecDeque::from(vec![head]), direction }
    }

    /// Builds a snake from its segments, head first. Panics on an empty body.
    #[cfg(test)]
    pub fn from_segments(segments: &[Coords], direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake has at least one segment");
        Snake { body: segments.iter().copied().collect(), direction }
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// Reversing onto the neck is ignored, the current heading is kept.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.direction = new_direction;
        }
    }

    pub fn next_head(&self) -> Coords {
        let (head, diff) = (self.head(), self.direction.offset());
        (head.0 + diff.0, head.1 + diff.1)
    }

    /// Advances one cell inside a `width` x `height` field. The whole current
    /// body, tail included, counts as an obstacle. On a crash the snake is
    /// left untouched.
    pub fn move_step(&mut self, width: i16, height: i16, food: Coords) -> MoveResult {
        let new_head = self.next_head();

        if new_head.0 < 0 || new_head.1 < 0 || new_head.0 >= width ||
           new_head.1 >= height || self.occupies(new_head) {
               return Crashed;
           }

        self.body.push_front(new_head);

        if new_head == food {
            Ate { new_head }
        } else {
            let old_tail = self.body[self.body.len() - 1];
            self.body.truncate(self.body.len() - 1);
            Moved { new_head, old_tail }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(snake: &Snake) -> Vec<Coords> {
        snake.body().iter().copied().collect()
    }

    #[test]
    fn plain_move_drops_tail() {
        let mut snake = Snake::from_segments(&[(5, 5), (4, 5), (3, 5)], Right);
        let res = snake.move_step(25, 20, (10, 10));

        assert_eq!(res, Moved { new_head: (6, 5), old_tail: (3, 5) });
        assert_eq!(segments(&snake), vec![(6, 5), (5, 5), (4, 5)]);
    }

    #[test]
    fn eating_keeps_tail() {
        let mut snake = Snake::new((5, 5), Right);
        let res = snake.move_step(25, 20, (6, 5));

        assert_eq!(res, Ate { new_head: (6, 5) });
        assert_eq!(segments(&snake), vec![(6, 5), (5, 5)]);
    }

    #[test]
    fn reversal_is_ignored() {
        for dir in [Up, Down, Left, Right].iter().copied() {
            let mut snake = Snake::new((5, 5), dir);
            snake.set_direction(dir.opposite());
            assert_eq!(snake.get_direction(), dir);
        }

        let mut snake = Snake::new((5, 5), Right);
        snake.set_direction(Up);
        assert_eq!(snake.get_direction(), Up);
    }

    #[test]
    fn walls_crash_and_freeze() {
        let cases = [((0, 3), Left), ((3, 0), Up), ((24, 3), Right), ((3, 19), Down)];

        for (head, dir) in cases.iter().copied() {
            let mut snake = Snake::new(head, dir);
            assert_eq!(snake.move_step(25, 20, (10, 10)), Crashed);
            assert_eq!(segments(&snake), vec![head]);
        }
    }

    #[test]
    fn column_zero_is_inside_the_field() {
        let mut snake = Snake::new((1, 1), Left);
        assert_eq!(snake.move_step(25, 20, (10, 10)), Moved { new_head: (0, 1), old_tail: (1, 1) });
    }

    #[test]
    fn moving_into_current_tail_crashes() {
        // Square loop: head (2,2) heading Up lands on the tail (2,1)
        let mut snake = Snake::from_segments(&[(2, 2), (3, 2), (3, 1), (2, 1)], Up);
        assert_eq!(snake.next_head(), (2, 1));
        assert_eq!(snake.move_step(25, 20, (10, 10)), Crashed);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn running_into_body_crashes() {
        let mut snake = Snake::from_segments(&[(3, 2), (3, 3), (2, 3), (2, 2), (2, 1)], Right);
        snake.set_direction(Down);
        assert_eq!(snake.move_step(25, 20, (10, 10)), Crashed);
    }
}
