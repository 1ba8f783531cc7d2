//! Monte Carlo калькулятор эквити для Texas Hold'em.
//!
//! Слои:
//!   - `domain`: карты, колода, сила руки;
//!   - `eval`: оценка 5-карточных рук и поиск лучшей из N карт;
//!   - `engine`: симуляция раздач и подсчёт эквити;
//!   - `infra`: RNG, seed'ы, логирование;
//!   - `api`: запросы/ответы для фронта.
//!
//! Быстрый старт:
//! ```no_run
//! let report = poker_equity::engine::run_simulations(
//!     &["Ace of spades, King of spades", ""],
//!     "Queen of spades, Jack of spades, 10 of spades",
//!     "",
//!     1_000,
//! )?;
//! println!("{report}");
//! # Ok::<(), poker_equity::engine::SimulationError>(())
//! ```

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
