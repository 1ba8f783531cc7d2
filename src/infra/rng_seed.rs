//! RngSeed: доменно-разделённый seed для RNG симуляции.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8; 32])
//!   - выводить независимые seed'ы для воркеров:
//!         new = H(domain || base || worker)
//!   - создавать DeterministicRng из seed

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (значение из конфига / CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed для воркера с номером `worker`. Разные воркеры получают
    /// некоррелированные потоки, один и тот же воркер: всегда один и тот же.
    pub fn derive(&self, worker: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"POKER_EQUITY_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(worker.to_le_bytes());

        let mut out = [0u8; 32];
        out.copy_from_slice(&hasher.finalize());
        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }
}
