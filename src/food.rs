use crate::rng::GameRng;
use crate::snake::Snake;
use crate::Coords;

/// Picks a food cell in `[1, width - 1] x [1, height - 1]` that the snake does
/// not cover, by rejection sampling. Returns `None` once every cell of that
/// region is taken, which would otherwise make the sampling spin forever.
pub fn place_food(snake: &Snake, width: i16, height: i16, rng: &mut GameRng) -> Option<Coords> {
    let region = (width - 1) as usize * (height - 1) as usize;
    let covered = snake.body().iter()
        .filter(|(x, y)| *x >= 1 && *y >= 1 && *x <= width - 1 && *y <= height - 1)
        .count();

    if covered >= region {
        return None;
    }

    loop {
        let candidate = (rng.next(1, width - 1), rng.next(1, height - 1));
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;

    #[test]
    fn never_on_the_snake() {
        let mut rng = GameRng::seeded(3);
        let snake = Snake::from_segments(&[(2, 1), (1, 1), (1, 2)], Right);

        for _ in 0..500 {
            let food = place_food(&snake, 3, 3, &mut rng).unwrap();
            assert_eq!(food, (2, 2));
        }
    }

    #[test]
    fn stays_in_sampling_region() {
        let mut rng = GameRng::seeded(11);
        let snake = Snake::new((0, 0), Right);

        for _ in 0..500 {
            let (x, y) = place_food(&snake, 6, 4, &mut rng).unwrap();
            assert!((1..=5).contains(&x));
            assert!((1..=3).contains(&y));
        }
    }

    #[test]
    fn full_region_yields_none() {
        let mut rng = GameRng::seeded(5);
        let snake = Snake::from_segments(&[(1, 1), (2, 1), (2, 2), (1, 2)], Up);
        assert_eq!(place_food(&snake, 3, 3, &mut rng), None);
    }

    #[test]
    fn cells_outside_region_do_not_count() {
        let mut rng = GameRng::seeded(5);
        // Three cells on row 0 plus one in the region still leaves one free
        let snake = Snake::from_segments(&[(0, 0), (1, 0), (2, 0), (2, 1)], Down);
        assert_eq!(place_food(&snake, 3, 2, &mut rng), Some((1, 1)));
    }
}
