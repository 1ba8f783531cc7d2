use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::PlayerIndex;
use crate::engine::accumulator::EquityAccumulator;

/// Эквити одного игрока по итогам прогона.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerEquity {
    pub player: PlayerIndex,
    /// Накопленные очки (0..=trials).
    pub points: f64,
    /// points / trials * 100.
    pub equity_pct: f64,
    pub outright_wins: u64,
    pub split_pots: u64,
}

/// Итоговый вердикт: единоличный лидер или ничья между несколькими игроками.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Winner(PlayerIndex),
    Draw(Vec<PlayerIndex>),
}

/// Сводка по прогону: то, что рисует фронт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationReport {
    pub trials: u64,
    pub players: Vec<PlayerEquity>,
    pub verdict: Verdict,
}

impl SimulationReport {
    pub fn from_accumulator(acc: &EquityAccumulator) -> Self {
        let trials = acc.trials();
        let players = (0..acc.num_players())
            .map(|p| {
                let points = acc.points(p);
                let equity_pct = if trials == 0 {
                    0.0
                } else {
                    points / trials as f64 * 100.0
                };
                PlayerEquity {
                    player: p,
                    points,
                    equity_pct,
                    outright_wins: acc.outright_wins(p),
                    split_pots: acc.split_pots(p),
                }
            })
            .collect();

        // Лидер определяется по точным очкам, а не по f64.
        let scaled: Vec<u128> = (0..acc.num_players()).map(|p| acc.scaled_points(p)).collect();
        let best = scaled.iter().copied().max().unwrap_or(0);
        let leaders: Vec<PlayerIndex> = scaled
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == best)
            .map(|(p, _)| p)
            .collect();

        let verdict = match leaders.as_slice() {
            [single] => Verdict::Winner(*single),
            _ => Verdict::Draw(leaders),
        };

        SimulationReport {
            trials,
            players,
            verdict,
        }
    }

    pub fn equity_of(&self, player: PlayerIndex) -> Option<f64> {
        self.players.get(player).map(|p| p.equity_pct)
    }
}

impl fmt::Display for SimulationReport {
    /// Текстовый отчёт в формате исходного консольного вывода.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Complete!")?;
        writeln!(f, "Total Simulations: {}", self.trials)?;
        writeln!(f)?;

        for p in &self.players {
            writeln!(f, "Player {} Win Rate: {:.2}%", p.player + 1, p.equity_pct)?;
        }
        writeln!(f)?;

        match &self.verdict {
            Verdict::Winner(p) => write!(f, "Player {} is the overall winner!", p + 1),
            Verdict::Draw(players) => {
                let list: Vec<String> = players.iter().map(|p| (p + 1).to_string()).collect();
                write!(f, "It's a draw between players: {}", list.join(" "))
            }
        }
    }
}
