use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG (thread-local генератор `rand`).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Детерминированный RNG для тестов и воспроизводимых прогонов.
/// Один и тот же seed даёт одни и те же раздачи.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_bytes(bytes: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(bytes),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
