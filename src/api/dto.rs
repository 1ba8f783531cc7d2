use serde::{Deserialize, Serialize};

use crate::engine::{SimulationReport, Verdict};
use crate::eval::HandResult;

/// Запрос на расчёт эквити: ровно то, что собирает форма ввода.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EquityRequest {
    /// По строке на игрока: "" или "Ace of spades, King of spades".
    pub players: Vec<String>,
    /// "" или до трёх карт через запятую.
    pub flop: String,
    /// "" или одна карта.
    pub turn: String,
    /// "" или одна карта.
    pub river: String,
    /// Число симуляций как его ввёл пользователь.
    pub trials: String,
    /// Параллельные воркеры (по умолчанию 1).
    pub workers: Option<usize>,
    /// Seed для воспроизводимого прогона.
    pub seed: Option<u64>,
}

/// Ответ на расчёт эквити.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EquityResponse {
    pub trials: u64,
    pub players: Vec<PlayerEquityDto>,
    pub verdict: Verdict,
    /// Готовый текст для вывода "как есть".
    pub summary: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerEquityDto {
    /// Номер игрока для показа (с единицы).
    pub seat: usize,
    pub equity_pct: f64,
    pub outright_wins: u64,
    pub split_pots: u64,
}

impl From<SimulationReport> for EquityResponse {
    fn from(report: SimulationReport) -> Self {
        let summary = report.to_string();
        EquityResponse {
            trials: report.trials,
            players: report
                .players
                .iter()
                .map(|p| PlayerEquityDto {
                    seat: p.player + 1,
                    equity_pct: p.equity_pct,
                    outright_wins: p.outright_wins,
                    split_pots: p.split_pots,
                })
                .collect(),
            verdict: report.verdict,
            summary,
        }
    }
}

/// Оценка одной руки из 5+ карт.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluateHandRequest {
    /// "Ace of spades, King of spades, ..."
    pub cards: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvaluationDto {
    pub hand_name: String,
    pub score: u32,
    pub best_hand: Vec<String>,
}

impl From<HandResult> for HandEvaluationDto {
    fn from(result: HandResult) -> Self {
        HandEvaluationDto {
            hand_name: result.hand_name().to_string(),
            score: result.score.0,
            best_hand: result.best_hand.iter().map(ToString::to_string).collect(),
        }
    }
}
