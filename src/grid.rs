use crate::config::Symbols;
use crate::snake::Snake;
use crate::Coords;

/// Symbol per field cell, row-major. Derived from the snake and the food on
/// every tick, never edited by the game logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    pub fn rebuild(snake: &Snake, food: Coords, width: i16, height: i16, symbols: &Symbols) -> Self {
        let (width, height) = (width as usize, height as usize);
        let mut grid = Grid { width, height, cells: vec![symbols.background; width * height] };

        for pos in snake.body() {
            grid.set(*pos, symbols.snake);
        }

        if grid.get(food) == Some(symbols.background) {
            grid.set(food, symbols.food);
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, pos: Coords) -> Option<char> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width)
    }

    fn set(&mut self, pos: Coords, ch: char) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = ch;
        }
    }

    fn index(&self, (x, y): Coords) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.width * y as usize + x as usize)
    }
}
