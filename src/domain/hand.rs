use serde::{Deserialize, Serialize};

/// Улица, до которой доложен борд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Улица по количеству известных общих карт.
    /// 1–2 карты (неполный флоп) считаются префлопом.
    pub fn from_board_len(len: usize) -> Self {
        match len {
            0..=2 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }
}

/// Сила 5-карточной руки. Больше: сильнее.
///
/// Категория зашита в десятки тысяч (10000 = старшая карта, 100000 = роял-флеш),
/// младшие разряды: старшинство внутри категории.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandScore(pub u32);

impl HandScore {
    pub const fn value(self) -> u32 {
        self.0
    }
}
