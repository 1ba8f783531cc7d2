use serde::{Deserialize, Serialize};

use crate::domain::card::parse_card_list;
use crate::engine::{
    parse_trial_count, CancelToken, SimulationConfig, SimulationError, SimulationSetup, Simulator,
};
use crate::eval::find_best_five_card_hand;

use super::dto::{EquityRequest, EquityResponse, EvaluateHandRequest, HandEvaluationDto};
use super::errors::ApiError;

/// Команда верхнего уровня.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Прогнать Monte Carlo и вернуть эквити игроков.
    RunEquity(EquityRequest),

    /// Найти лучшую 5-карточную руку в наборе карт.
    EvaluateHand(EvaluateHandRequest),
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "response", rename_all = "snake_case")]
pub enum CommandResponse {
    Equity(EquityResponse),
    HandEvaluation(HandEvaluationDto),
}

/// Выполнить команду. `cancel` позволяет фронту прервать долгий прогон.
pub fn execute(command: &Command, cancel: Option<CancelToken>) -> Result<CommandResponse, ApiError> {
    match command {
        Command::RunEquity(req) => run_equity(req, cancel).map(CommandResponse::Equity),
        Command::EvaluateHand(req) => evaluate_hand(req).map(CommandResponse::HandEvaluation),
    }
}

/// Прогон эквити по запросу формы.
///
/// Число симуляций проверяется до того, как что-либо запустится.
pub fn run_equity(
    request: &EquityRequest,
    cancel: Option<CancelToken>,
) -> Result<EquityResponse, ApiError> {
    let trials = parse_trial_count(&request.trials)?;
    let setup = SimulationSetup::parse_with_river(
        &request.players,
        &request.flop,
        &request.turn,
        &request.river,
    )?;

    let config = SimulationConfig {
        trials,
        workers: request.workers.unwrap_or(1),
        seed: request.seed,
        ..SimulationConfig::default()
    };
    let mut simulator = Simulator::new(config);
    if let Some(token) = cancel {
        simulator = simulator.with_cancel_token(token);
    }

    let report = simulator.run(&setup)?;
    Ok(report.into())
}

/// Оценка одного набора карт (5..=7 и больше).
pub fn evaluate_hand(request: &EvaluateHandRequest) -> Result<HandEvaluationDto, ApiError> {
    let cards = parse_card_list(&request.cards).map_err(SimulationError::from)?;
    let result = find_best_five_card_hand(&cards).map_err(|e| ApiError::InvalidCards(e.to_string()))?;
    Ok(result.into())
}

/// JSON-вход / JSON-выход: для фронтов, которые общаются строками.
pub fn execute_json(raw: &str) -> Result<String, ApiError> {
    let command: Command =
        serde_json::from_str(raw).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let response = execute(&command, None)?;
    serde_json::to_string(&response).map_err(|e| ApiError::Internal(e.to_string()))
}
