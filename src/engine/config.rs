use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::deck::ExhaustionPolicy;

/// Число симуляций по умолчанию: этого хватает для сходимости до десятых процента.
pub const DEFAULT_TRIALS: u64 = 10_000;

/// Параметры прогона.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Сколько раздач сыграть.
    pub trials: u64,
    /// Сколько независимых воркеров (1 = последовательно).
    pub workers: usize,
    /// Seed для воспроизводимого прогона. `None`: системный RNG.
    pub seed: Option<u64>,
    /// Поведение колоды при исчерпании.
    pub exhaustion: ExhaustionPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            workers: 1,
            seed: None,
            exhaustion: ExhaustionPolicy::Refill,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Битый JSON конфига: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimulationConfig {
    pub fn with_trials(trials: u64) -> Self {
        Self {
            trials,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
