use serde::{Deserialize, Serialize};

use crate::domain::PlayerIndex;

/// Накопитель эквити.
///
/// Доли хранятся точно: для каждого игрока считаем, сколько раз он взял банк,
/// поделённый на k человек (k = 1..=число игроков). Очки = сумма count_k / k,
/// в `f64` переводятся только при выдаче, так что ошибки округления не копятся.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EquityAccumulator {
    /// `split_wins[p][k - 1]`
    split_wins: Vec<Vec<u64>>,
    trials: u64,
}

impl EquityAccumulator {
    pub fn new(num_players: usize) -> Self {
        Self {
            split_wins: vec![vec![0; num_players]; num_players],
            trials: 0,
        }
    }

    pub fn num_players(&self) -> usize {
        self.split_wins.len()
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Засчитать раздачу: каждый победитель получает 1/|winners|.
    pub fn award(&mut self, winners: &[PlayerIndex]) {
        self.trials += 1;
        let k = winners.len();
        if k == 0 {
            return;
        }
        for &w in winners {
            if let Some(counts) = self.split_wins.get_mut(w) {
                counts[k - 1] += 1;
            }
        }
    }

    /// Слить частичный накопитель воркера.
    pub fn merge(&mut self, other: &EquityAccumulator) {
        self.trials += other.trials;
        for (mine, theirs) in self.split_wins.iter_mut().zip(&other.split_wins) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
    }

    /// Накопленные очки игрока (0..=trials).
    pub fn points(&self, player: PlayerIndex) -> f64 {
        self.split_wins.get(player).map_or(0.0, |counts| {
            counts
                .iter()
                .enumerate()
                .map(|(i, &c)| c as f64 / (i + 1) as f64)
                .sum()
        })
    }

    /// Сумма очков всех игроков. Для корректных данных равна `trials`.
    pub fn total_points(&self) -> f64 {
        let n = self.num_players();
        (0..n)
            .map(|i| {
                let column: u64 = self.split_wins.iter().map(|c| c[i]).sum();
                // column всегда кратно (i + 1), деление точное
                (column / (i as u64 + 1)) as f64
            })
            .sum()
    }

    /// Выигрыши без дележа.
    pub fn outright_wins(&self, player: PlayerIndex) -> u64 {
        self.split_wins
            .get(player)
            .and_then(|c| c.first())
            .copied()
            .unwrap_or(0)
    }

    /// Разделённые банки.
    pub fn split_pots(&self, player: PlayerIndex) -> u64 {
        self.split_wins
            .get(player)
            .map_or(0, |c| c.iter().skip(1).sum())
    }

    /// Очки в целых единицах 1/lcm(1..=n): точное сравнение игроков между собой.
    pub fn scaled_points(&self, player: PlayerIndex) -> u128 {
        let lcm = lcm_up_to(self.num_players());
        self.split_wins.get(player).map_or(0, |counts| {
            counts
                .iter()
                .enumerate()
                .map(|(i, &c)| c as u128 * (lcm / (i as u128 + 1)))
                .sum()
        })
    }
}

fn lcm_up_to(n: usize) -> u128 {
    fn gcd(a: u128, b: u128) -> u128 {
        if b == 0 {
            a
        } else {
            gcd(b, a % b)
        }
    }
    (1..=n.max(1) as u128).fold(1, |acc, k| acc / gcd(acc, k) * k)
}
