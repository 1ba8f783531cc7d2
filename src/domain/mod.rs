//! Доменная модель: карты, колода, сила руки.

pub mod card;
pub mod deck;
pub mod hand;

/// Индекс игрока в порядке ввода (0-based).
pub type PlayerIndex = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
