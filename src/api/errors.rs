use serde::{Deserialize, Serialize};

use crate::engine::SimulationError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Не удалось разобрать карту или набор карт некорректен.
    InvalidCards(String),

    /// Число симуляций не является целым положительным.
    InvalidSimulationCount(String),

    /// Прогон был отменён.
    Cancelled,

    /// Внутренняя ошибка движка.
    Internal(String),
}

impl From<SimulationError> for ApiError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::InvalidSimulationCount(raw) => ApiError::InvalidSimulationCount(raw),
            SimulationError::Cancelled => ApiError::Cancelled,
            SimulationError::InvalidCardFormat(_)
            | SimulationError::NoPlayers
            | SimulationError::TooManyPlayers(_)
            | SimulationError::TooManyHoleCards(_)
            | SimulationError::TooManyBoardCards { .. }
            | SimulationError::DuplicateCard(_) => ApiError::InvalidCards(err.to_string()),
            SimulationError::Deck(_) | SimulationError::Eval(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            ApiError::InvalidCards(msg) => write!(f, "Invalid cards: {msg}"),
            ApiError::InvalidSimulationCount(raw) => {
                write!(f, "Invalid number of simulations: {raw:?}. Please enter a valid integer.")
            }
            ApiError::Cancelled => write!(f, "Simulation cancelled"),
            ApiError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}
