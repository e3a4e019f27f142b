use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer source used for spawning. Owned by the session rather than
/// living in a global, so a fixed seed replays the same game.
pub struct GameRng {
    rng: StdRng,
}

impl GameRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng { rng: StdRng::from_entropy() },
        }
    }

    pub fn seeded(seed: u64) -> Self {
        GameRng { rng: StdRng::seed_from_u64(seed) }
    }

    /// Uniform value in the closed range `[min, max]`.
    pub fn next(&mut self, min: i16, max: i16) -> i16 {
        self.rng.gen_range(min..=max)
    }
}
