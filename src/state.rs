use log::{debug, info};

use crate::config::Symbols;
use crate::food::place_food;
use crate::grid::Grid;
use crate::rng::GameRng;
use crate::snake::{Direction, MoveResult, Snake};
use crate::Coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver,
    /// The snake covers every cell food could spawn on.
    Won,
}

#[derive(Debug, Clone)]
pub struct GameState {
    width: i16,
    height: i16,
    symbols: Symbols,
    snake: Snake,
    food: Coords,
    score: u32,
    status: Status,
    grid: Grid,
}

impl GameState {
    /// Spawns a one-cell snake heading right and a first piece of food.
    pub fn init(width: i16, height: i16, symbols: Symbols, rng: &mut GameRng) -> Self {
        let head = (rng.next(1, width - 1), rng.next(1, height - 1));
        let snake = Snake::new(head, Direction::Right);
        let food = place_food(&snake, width, height, rng);

        let mut state = GameState::with_parts(width, height, symbols, snake, food.unwrap_or(head));
        if food.is_none() {
            // Only a 2x2 field leaves no room next to the spawn
            state.status = Status::Won;
        }

        info!("New game on {}x{} field, snake at {:?}, food at {:?}", width, height, head, state.food);
        state
    }

    pub fn with_parts(width: i16, height: i16, symbols: Symbols, snake: Snake, food: Coords) -> Self {
        let grid = Grid::rebuild(&snake, food, width, height, &symbols);
        GameState { width, height, symbols, snake, food, score: 0, status: Status::Running, grid }
    }

    /// Runs one tick. `turn` is the heading requested since the last tick, if
    /// any. Does nothing once the game has ended.
    pub fn step(&mut self, turn: Option<Direction>, rng: &mut GameRng) {
        if self.is_terminated() {
            return;
        }

        if let Some(dir) = turn {
            self.snake.set_direction(dir);
        }

        match self.snake.move_step(self.width, self.height, self.food) {
            MoveResult::Crashed => {
                info!("Snake crashed at {:?} heading {:?}, score {}",
                      self.snake.next_head(), self.snake.get_direction(), self.score);
                self.status = Status::GameOver;
                return;
            },
            MoveResult::Ate { new_head } => {
                self.score += 1;
                debug!("Food eaten at {:?}, score {}", new_head, self.score);

                match place_food(&self.snake, self.width, self.height, rng) {
                    Some(food) => self.food = food,
                    None => {
                        info!("No free cell left for food, game won with score {}", self.score);
                        self.status = Status::Won;
                    },
                }
            },
            MoveResult::Moved { .. } => {},
        }

        self.grid = Grid::rebuild(&self.snake, self.food, self.width, self.height, &self.symbols);
    }

    pub fn is_terminated(&self) -> bool {
        self.status != Status::Running
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
