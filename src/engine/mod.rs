//! Monte Carlo движок эквити: раздача недостающих карт, шоудаун, подсчёт долей.
//!
//! Высокоуровневый объект: `Simulator`
//! Основные операции:
//!   - `SimulationSetup::parse` – разобрать и проверить ввод игроков/борда
//!   - `run_trial` – одна случайная раздача до ривера с шоудауном
//!   - `Simulator::run` – N раздач (последовательно или на пуле rayon)
//!   - `run_simulations` – текстовая точка входа для фронта

pub mod accumulator;
pub mod config;
pub mod errors;
pub mod report;
pub mod setup;
pub mod simulation;
pub mod trial;

pub use accumulator::EquityAccumulator;
pub use config::{ConfigError, SimulationConfig};
pub use errors::SimulationError;
pub use report::{PlayerEquity, SimulationReport, Verdict};
pub use setup::{SimulationSetup, MAX_PLAYERS};
pub use simulation::{parse_trial_count, run_simulations, CancelToken, Simulator};
pub use trial::{run_trial, PlayerShowdown, TrialOutcome};

/// RNG интерфейс для движка и колоды.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно случайный индекс в `0..len`. `len` > 0.
    fn pick(&mut self, len: usize) -> usize;
}
