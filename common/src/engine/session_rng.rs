use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded randomness for one session: the coin flip and the opening corner.
///
/// Keeping the seed lets a logged game be replayed exactly with `--seed`.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent generator, one per round.
    pub fn fork(&mut self) -> SessionRng {
        SessionRng::new(self.rng.random())
    }

    pub fn coin_flip(&mut self) -> bool {
        self.rng.random()
    }

    pub(crate) fn inner(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
