use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Spades,   // ♠
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
}

impl Suit {
    /// Все масти в порядке построения колоды.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Имя масти в каноническом (нижнем) регистре.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }

    /// Индекс 0..4 для табличных подсчётов.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Ранг карты. Числовое значение совпадает с "value" карты (2..14).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Все ранги от двойки до туза.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Значение 2..14 (Jack=11, Queen=12, King=13, Ace=14).
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.value() == v)
    }

    /// Имя ранга в каноническом виде: "2".."10", "Jack", "Queen", "King", "Ace".
    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Разбор токена ранга без учёта регистра.
    /// Понимает и полные имена ("queen"), и короткие ("Q", "T").
    pub fn parse_token(token: &str) -> Option<Rank> {
        let t = token.trim().to_ascii_lowercase();
        let rank = match t.as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "t" => Rank::Ten,
            "jack" | "j" => Rank::Jack,
            "queen" | "q" => Rank::Queen,
            "king" | "k" => Rank::King,
            "ace" | "a" => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl Suit {
    /// Разбор токена масти без учёта регистра ("Spades", "s").
    pub fn parse_token(token: &str) -> Option<Suit> {
        let t = token.trim().to_ascii_lowercase();
        let suit = match t.as_str() {
            "spades" | "s" => Suit::Spades,
            "hearts" | "h" => Suit::Hearts,
            "diamonds" | "d" => Suit::Diamonds,
            "clubs" | "c" => Suit::Clubs,
            _ => return None,
        };
        Some(suit)
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Числовое значение карты 2..14.
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }
}

/// Ошибки разбора текстового представления карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Неверный формат карты: {0:?}")]
    InvalidCardFormat(String),

    #[error("Неизвестная масть: {0:?}")]
    InvalidSuit(String),
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Card {
    /// Канонический формат: `Ace of spades`, `10 of hearts`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ace of spades" (регистр не важен)
/// или короткой формы "As", "Td", "10c".
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split_whitespace().collect();

        let (rank_token, suit_token) = match parts.as_slice() {
            [rank, of, suit] if of.eq_ignore_ascii_case("of") => (*rank, *suit),
            [short] if short.len() >= 2 && short.is_ascii() => short.split_at(short.len() - 1),
            _ => return Err(CardParseError::InvalidCardFormat(s.to_string())),
        };

        let rank = Rank::parse_token(rank_token)
            .ok_or_else(|| CardParseError::InvalidCardFormat(s.to_string()))?;
        let suit = Suit::parse_token(suit_token)
            .ok_or_else(|| CardParseError::InvalidSuit(suit_token.to_string()))?;

        Ok(Card { rank, suit })
    }
}

/// Разобрать список карт, разделённых запятыми: "Ace of spades, King of spades".
///
/// Пустая строка (или только пробелы): это пустой список, а не ошибка.
pub fn parse_card_list(input: &str) -> Result<Vec<Card>, CardParseError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input.split(',').map(str::parse).collect()
}

/// Отформатировать список карт обратно в "A of s, B of h".
pub fn format_card_list(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
