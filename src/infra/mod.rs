//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для колоды;
//! - seed'ы для воспроизводимых и параллельных прогонов;
//! - инициализация логирования.

pub mod logging;
pub mod rng;
pub mod rng_seed;

pub use logging::{init_logging, LoggingError};
pub use rng::*;
pub use rng_seed::RngSeed;
