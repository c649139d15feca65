use rand::distributions::Standard;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of the random draws used during enrichment.
/// Production runs are non-deterministic unless seeded.
pub trait Chance {
    /// Uniform draw in `[0, 1)`
    fn roll(&mut self) -> f64;

    /// Uniform index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

impl<C: Chance + ?Sized> Chance for Box<C> {
    fn roll(&mut self) -> f64 {
        (**self).roll()
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

pub struct RandomChance<R> {
    rng: R,
}

impl RandomChance<ThreadRng> {
    pub fn from_thread() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomChance<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Chance for RandomChance<R> {
    fn roll(&mut self) -> f64 {
        self.rng.sample(Standard)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
