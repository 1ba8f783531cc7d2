use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::card::{format_card_list, Card};
use crate::domain::deck::{Deck, DeckError, ExhaustionPolicy};
use crate::domain::PlayerIndex;
use crate::engine::errors::SimulationError;
use crate::engine::setup::SimulationSetup;
use crate::engine::RandomSource;
use crate::eval::{find_best_five_card_hand, HandResult};

/// Итог одного игрока в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerShowdown {
    pub hole: [Card; 2],
    pub result: HandResult,
}

/// Итог одной симуляционной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrialOutcome {
    pub board: Vec<Card>,
    pub players: Vec<PlayerShowdown>,
    /// Все игроки с максимальным баллом (больше одного: сплит).
    pub winners: Vec<PlayerIndex>,
}

/// Сыграть одну раздачу до ривера и определить победителей.
///
/// 1. Колода без зафиксированных карт.
/// 2. Добираем карманные карты до двух.
/// 3. Флоп и тёрн из ввода, остальной борд: случайно.
/// 4. Лучшая 5-карточная рука каждого игрока.
/// 5. Победители: все с максимальным баллом.
pub fn run_trial<R: RandomSource>(
    setup: &SimulationSetup,
    policy: ExhaustionPolicy,
    rng: &mut R,
) -> Result<TrialOutcome, SimulationError> {
    let mut deck = Deck::with_policy(&setup.excluded(), policy);
    let mut used: HashSet<Card> = HashSet::with_capacity(2 * setup.num_players() + 5);

    // 2. Карманные карты.
    let mut holes = Vec::with_capacity(setup.num_players());
    for player in 0..setup.num_players() {
        let mut hole = setup.hole_cards(player).to_vec();
        while hole.len() < 2 {
            hole.push(deck.draw(rng)?);
        }
        used.extend(hole.iter().copied());
        holes.push([hole[0], hole[1]]);
    }

    // 3. Борд.
    let mut board = Vec::with_capacity(5);
    for card in setup.fixed_board() {
        board.push(deck.draw_precise(card));
        used.insert(card);
    }
    // Каждая неудачная попытка убирает карту из колоды,
    // так что лимит срабатывает только при зацикленной пересборке.
    let mut attempts = 0;
    while board.len() < 5 {
        if attempts > 2 * 52 {
            return Err(DeckError::Exhausted.into());
        }
        attempts += 1;
        let card = deck.draw(rng)?;
        if used.insert(card) {
            board.push(card);
        }
    }

    // 4. Оценка.
    let mut players = Vec::with_capacity(holes.len());
    for hole in holes {
        let mut seven = Vec::with_capacity(7);
        seven.extend_from_slice(&hole);
        seven.extend_from_slice(&board);
        let result = find_best_five_card_hand(&seven)?;
        players.push(PlayerShowdown { hole, result });
    }

    // 5. Победители.
    let best = players
        .iter()
        .map(|p| p.result.score)
        .max()
        .unwrap_or_default();
    let winners = players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.result.score == best)
        .map(|(idx, _)| idx)
        .collect();

    Ok(TrialOutcome {
        board,
        players,
        winners,
    })
}

impl TrialOutcome {
    /// Подробный отчёт о раздаче в лог (уровень debug), сильнейшие руки сверху.
    pub fn log_debug(&self, round: u64) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        log::debug!("round {round}: board {}", format_card_list(&self.board));

        let mut order: Vec<usize> = (0..self.players.len()).collect();
        order.sort_by(|&a, &b| self.players[b].result.score.cmp(&self.players[a].result.score));
        for idx in order {
            let p = &self.players[idx];
            log::debug!(
                "{:<35} | {:<7} | {:<16} | {}",
                format_card_list(&p.hole),
                p.result.score.0,
                p.result.hand_name().to_lowercase(),
                format_card_list(&p.result.best_hand)
            );
        }

        let winners: Vec<String> = self.winners.iter().map(|w| (w + 1).to_string()).collect();
        log::debug!("round {round}: winner(s) {}", winners.join(", "));
    }
}
