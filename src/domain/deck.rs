use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Что делать, когда из колоды тянут карту, а она пуста.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Пересобрать колоду (с учётом исключённых карт) и тянуть дальше.
    /// Уже выданные в этой раздаче карты при этом возвращаются в игру.
    #[default]
    Refill,
    /// Считать пустую колоду ошибкой.
    Fail,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Колода пуста: не осталось ни одной доступной карты")]
    Exhausted,
}

/// Колода для одной симуляционной раздачи.
///
/// Инвариант: каждая из 52 карт встречается не более одного раза,
/// исключённые карты (`excluded`) в колоду никогда не попадают,
/// в том числе после пересборки.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    excluded: HashSet<Card>,
    policy: ExhaustionPolicy,
}

impl Deck {
    /// Полная 52-карточная колода без исключений.
    pub fn standard_52() -> Self {
        Self::initialize(&HashSet::new())
    }

    /// Собрать 52 карты, молча пропуская всё, что есть в `excluded`.
    pub fn initialize(excluded: &HashSet<Card>) -> Self {
        Self::with_policy(excluded, ExhaustionPolicy::default())
    }

    pub fn with_policy(excluded: &HashSet<Card>, policy: ExhaustionPolicy) -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(52),
            excluded: excluded.clone(),
            policy,
        };
        deck.reinitialize();
        deck
    }

    /// Заново заполнить колоду: Spades 2..A, Hearts 2..A, Diamonds 2..A, Clubs 2..A
    /// минус исключённые карты.
    pub fn reinitialize(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(rank, suit);
                if !self.excluded.contains(&card) {
                    self.cards.push(card);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn policy(&self) -> ExhaustionPolicy {
        self.policy
    }

    /// Убрать карту, если она есть. Отсутствие карты: не ошибка.
    pub fn remove_card(&mut self, card: &Card) {
        if let Some(pos) = self.cards.iter().position(|c| c == card) {
            self.cards.swap_remove(pos);
        }
    }

    /// Убрать из колоды уже использованные карты.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }

    /// Вытянуть случайную карту (равномерно по оставшимся).
    ///
    /// При пустой колоде поведение задаёт `ExhaustionPolicy`.
    pub fn draw<R: RandomSource>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            match self.policy {
                ExhaustionPolicy::Fail => return Err(DeckError::Exhausted),
                ExhaustionPolicy::Refill => {
                    log::warn!("deck is empty, refilling ({} cards excluded)", self.excluded.len());
                    self.reinitialize();
                    if self.cards.is_empty() {
                        return Err(DeckError::Exhausted);
                    }
                }
            }
        }

        let idx = rng.pick(self.cards.len());
        Ok(self.cards.swap_remove(idx))
    }

    /// Взять n случайных карт.
    pub fn draw_n<R: RandomSource>(&mut self, n: usize, rng: &mut R) -> Result<Vec<Card>, DeckError> {
        (0..n).map(|_| self.draw(rng)).collect()
    }

    /// "Точная" выдача: убрать карту из колоды, если она там есть,
    /// и вернуть её в любом случае.
    pub fn draw_precise(&mut self, card: Card) -> Card {
        self.remove_card(&card);
        card
    }
}
