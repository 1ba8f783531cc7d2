use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::engine::accumulator::EquityAccumulator;
use crate::engine::config::SimulationConfig;
use crate::engine::errors::SimulationError;
use crate::engine::report::SimulationReport;
use crate::engine::setup::SimulationSetup;
use crate::engine::trial::run_trial;
use crate::engine::RandomSource;
use crate::infra::{RngSeed, SystemRng};

/// Флаг отмены, проверяется между раздачами.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Monte Carlo симулятор эквити.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    config: SimulationConfig,
    cancel: CancelToken,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::new(),
        }
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Прогнать `config.trials` раздач и собрать отчёт.
    pub fn run(&self, setup: &SimulationSetup) -> Result<SimulationReport, SimulationError> {
        let trials = self.config.trials;
        if trials == 0 {
            return Err(SimulationError::InvalidSimulationCount(trials.to_string()));
        }

        let workers = self.config.workers.max(1).min(trials.min(usize::MAX as u64) as usize);
        log::info!(
            "running {} trials for {} players ({:?}, {} worker(s))",
            trials,
            setup.num_players(),
            setup.street(),
            workers
        );
        let started = Instant::now();

        let acc = if workers == 1 {
            self.run_worker(setup, 0, trials)?
        } else {
            let partials = (0..workers)
                .into_par_iter()
                .map(|w| {
                    // первые trials % workers воркеров берут на одну раздачу больше
                    let share = trials / workers as u64
                        + u64::from((w as u64) < trials % workers as u64);
                    self.run_worker(setup, w, share)
                })
                .collect::<Result<Vec<_>, _>>()?;

            let mut total = EquityAccumulator::new(setup.num_players());
            for partial in &partials {
                total.merge(partial);
            }
            total
        };

        log::info!("finished {} trials in {:.2?}", acc.trials(), started.elapsed());
        Ok(SimulationReport::from_accumulator(&acc))
    }

    /// Частичный прогон одного воркера со своим RNG.
    fn run_worker(
        &self,
        setup: &SimulationSetup,
        worker: usize,
        trials: u64,
    ) -> Result<EquityAccumulator, SimulationError> {
        match self.config.seed {
            Some(seed) => {
                let mut rng = RngSeed::from_u64(seed).derive(worker as u64).to_rng();
                self.run_trials(setup, trials, &mut rng)
            }
            None => self.run_trials(setup, trials, &mut SystemRng),
        }
    }

    fn run_trials<R: RandomSource>(
        &self,
        setup: &SimulationSetup,
        trials: u64,
        rng: &mut R,
    ) -> Result<EquityAccumulator, SimulationError> {
        let mut acc = EquityAccumulator::new(setup.num_players());
        for round in 1..=trials {
            if self.cancel.is_cancelled() {
                log::warn!("simulation cancelled after {} trials", acc.trials());
                return Err(SimulationError::Cancelled);
            }
            let outcome = run_trial(setup, self.config.exhaustion, rng)?;
            outcome.log_debug(round);
            acc.award(&outcome.winners);
        }
        Ok(acc)
    }
}

/// Разобрать число симуляций, введённое пользователем.
pub fn parse_trial_count(input: &str) -> Result<u64, SimulationError> {
    match input.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SimulationError::InvalidSimulationCount(input.to_string())),
    }
}

/// Текстовая точка входа: строки игроков, флоп, тёрн, число раздач → текстовый отчёт.
///
/// Любая ошибка разбора карт валит весь прогон.
pub fn run_simulations<S: AsRef<str>>(
    player_inputs: &[S],
    flop: &str,
    turn: &str,
    trials: u64,
) -> Result<String, SimulationError> {
    let setup = SimulationSetup::parse(player_inputs, flop, turn)?;
    let report = Simulator::new(SimulationConfig::with_trials(trials)).run(&setup)?;
    Ok(report.to_string())
}
