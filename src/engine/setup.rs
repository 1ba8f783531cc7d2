use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::card::{parse_card_list, Card};
use crate::domain::hand::Street;
use crate::engine::errors::SimulationError;

/// Сколько игроков гарантированно помещается в одну колоду:
/// 2 * 23 + 5 = 51 <= 52.
pub const MAX_PLAYERS: usize = 23;

/// Зафиксированные пользователем карты: карманные карты игроков
/// (0, 1 или 2 на игрока), флоп (0..=3), тёрн и ривер.
///
/// Это заменяет глобальный список "использованных карт": одна неизменяемая
/// конфигурация на весь прогон, из неё каждая раздача строит свою колоду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationSetup {
    players: Vec<Vec<Card>>,
    flop: Vec<Card>,
    turn: Option<Card>,
    river: Option<Card>,
}

impl SimulationSetup {
    /// Собрать и проверить конфигурацию из уже разобранных карт.
    pub fn new(
        players: Vec<Vec<Card>>,
        flop: Vec<Card>,
        turn: Option<Card>,
    ) -> Result<Self, SimulationError> {
        Self::with_river(players, flop, turn, None)
    }

    /// То же, что `new`, но с известным ривером (борд может быть зафиксирован целиком).
    pub fn with_river(
        players: Vec<Vec<Card>>,
        flop: Vec<Card>,
        turn: Option<Card>,
        river: Option<Card>,
    ) -> Result<Self, SimulationError> {
        let setup = SimulationSetup {
            players,
            flop,
            turn,
            river,
        };
        setup.validate()?;
        Ok(setup)
    }

    /// Разобрать текстовый ввод фронта.
    ///
    /// `player_inputs[i]`: пустая строка или "V1 of S1, V2 of S2";
    /// `flop`: пустая строка или до трёх карт; `turn`: пустая строка или одна карта.
    pub fn parse<S: AsRef<str>>(
        player_inputs: &[S],
        flop: &str,
        turn: &str,
    ) -> Result<Self, SimulationError> {
        Self::parse_with_river(player_inputs, flop, turn, "")
    }

    /// Разбор ввода с отдельной строкой ривера ("": случайный).
    pub fn parse_with_river<S: AsRef<str>>(
        player_inputs: &[S],
        flop: &str,
        turn: &str,
        river: &str,
    ) -> Result<Self, SimulationError> {
        let players = player_inputs
            .iter()
            .map(|input| parse_card_list(input.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let flop = parse_card_list(flop)?;

        let turn_cards = parse_card_list(turn)?;
        let river_cards = parse_card_list(river)?;
        if turn_cards.len() > 1 || river_cards.len() > 1 {
            return Err(SimulationError::TooManyBoardCards {
                flop: flop.len(),
                turn: turn_cards.len() + river_cards.len(),
            });
        }

        Self::with_river(
            players,
            flop,
            turn_cards.first().copied(),
            river_cards.first().copied(),
        )
    }

    fn validate(&self) -> Result<(), SimulationError> {
        if self.players.is_empty() {
            return Err(SimulationError::NoPlayers);
        }
        if self.players.len() > MAX_PLAYERS {
            return Err(SimulationError::TooManyPlayers(self.players.len()));
        }
        if let Some(idx) = self.players.iter().position(|hole| hole.len() > 2) {
            return Err(SimulationError::TooManyHoleCards(idx + 1));
        }
        if self.flop.len() > 3 {
            return Err(SimulationError::TooManyBoardCards {
                flop: self.flop.len(),
                turn: usize::from(self.turn.is_some()) + usize::from(self.river.is_some()),
            });
        }

        let mut seen = HashSet::new();
        for card in self.fixed_cards() {
            if !seen.insert(card) {
                return Err(SimulationError::DuplicateCard(card));
            }
        }
        Ok(())
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Зафиксированные карманные карты игрока.
    pub fn hole_cards(&self, player: usize) -> &[Card] {
        self.players.get(player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn flop(&self) -> &[Card] {
        &self.flop
    }

    pub fn turn(&self) -> Option<Card> {
        self.turn
    }

    pub fn river(&self) -> Option<Card> {
        self.river
    }

    /// Известная часть борда: флоп, затем тёрн и ривер.
    pub fn fixed_board(&self) -> Vec<Card> {
        self.flop
            .iter()
            .copied()
            .chain(self.turn)
            .chain(self.river)
            .collect()
    }

    pub fn street(&self) -> Street {
        Street::from_board_len(self.fixed_board().len())
    }

    /// Все зафиксированные карты (игроки + борд).
    pub fn fixed_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.players
            .iter()
            .flatten()
            .chain(self.flop.iter())
            .copied()
            .chain(self.turn)
            .chain(self.river)
    }

    /// Множество карт, которые надо исключить из колоды каждой раздачи.
    pub fn excluded(&self) -> HashSet<Card> {
        self.fixed_cards().collect()
    }
}
