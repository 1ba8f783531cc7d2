use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{format_card_list, Card};
use crate::domain::hand::HandScore;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandCategory {
    /// Базовый балл категории: 10000 за старшую карту ... 100000 за роял-флеш.
    pub const fn base_score(self) -> u32 {
        self as u32 * 10_000
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl HandScore {
    /// Вытащить категорию из балла. `None` для нулевого балла "Invalid Hand".
    pub fn category(&self) -> Option<HandCategory> {
        let category = match self.0 / 10_000 {
            1 => HandCategory::HighCard,
            2 => HandCategory::OnePair,
            3 => HandCategory::TwoPair,
            4 => HandCategory::ThreeOfAKind,
            5 => HandCategory::Straight,
            6 => HandCategory::Flush,
            7 => HandCategory::FullHouse,
            8 => HandCategory::FourOfAKind,
            9 => HandCategory::StraightFlush,
            10 => HandCategory::RoyalFlush,
            _ => return None,
        };
        Some(category)
    }
}

/// Метка для руки, которую не удалось оценить (меньше 5 карт).
pub const INVALID_HAND: &str = "Invalid Hand";

/// Результат поиска лучшей 5-карточной комбинации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResult {
    /// Лучшие 5 карт (для деградированного результата: то, что было передано).
    pub best_hand: Vec<Card>,
    /// `None` означает "Invalid Hand".
    pub category: Option<HandCategory>,
    pub score: HandScore,
}

impl HandResult {
    /// Деградированный результат: карт не хватило, руку использовать нельзя.
    pub fn invalid(cards: &[Card]) -> Self {
        HandResult {
            best_hand: cards.to_vec(),
            category: None,
            score: HandScore(0),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.category.is_some()
    }

    /// Человеческое имя категории ("Full House" / "Invalid Hand").
    pub fn hand_name(&self) -> &'static str {
        self.category.map_or(INVALID_HAND, HandCategory::name)
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.hand_name(),
            self.score.0,
            format_card_list(&self.best_hand)
        )
    }
}

/// Удобная функция – получить категорию из балла.
pub fn hand_category(score: HandScore) -> Option<HandCategory> {
    score.category()
}

/// Человеческое описание руки по баллу.
pub fn describe_hand(score: HandScore) -> &'static str {
    score.category().map_or(INVALID_HAND, HandCategory::name)
}
