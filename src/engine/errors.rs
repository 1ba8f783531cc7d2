use crate::domain::{Card, CardParseError, DeckError};
use crate::eval::EvalError;

use thiserror::Error;

/// Ошибки симуляции.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Неверное число симуляций: {0:?} (нужно целое положительное)")]
    InvalidSimulationCount(String),

    #[error(transparent)]
    InvalidCardFormat(#[from] CardParseError),

    #[error("Нужен хотя бы один игрок")]
    NoPlayers,

    #[error("Слишком много игроков: {0} (максимум {})", crate::engine::MAX_PLAYERS)]
    TooManyPlayers(usize),

    #[error("У игрока {0} больше двух карманных карт")]
    TooManyHoleCards(usize),

    #[error("Слишком много карт на борде: флоп {flop}, тёрн/ривер {turn}")]
    TooManyBoardCards { flop: usize, turn: usize },

    #[error("Карта {0} указана больше одного раза")]
    DuplicateCard(Card),

    #[error("Ошибка колоды: {0}")]
    Deck(#[from] DeckError),

    #[error("Ошибка оценки руки: {0}")]
    Eval(#[from] EvalError),

    #[error("Симуляция отменена")]
    Cancelled,
}
