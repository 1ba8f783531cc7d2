use crate::domain::card::{Card, Rank};

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маска wheel-стрита A2345.
pub const WHEEL_MASK: RankMask = 0b1_0000_0000_1111;

/// Маски всех стритов, индекс = старшая карта стрита минус 5.
///
///   0: A-5 (wheel)     : A2345
///   1: 6-2             : 23456
///   ...
///   9: A-T (broadway)  : TJQKA
pub const STRAIGHT_MASKS: [RankMask; 10] = build_straight_masks();

const fn build_straight_masks() -> [RankMask; 10] {
    let mut masks = [0; 10];
    masks[0] = WHEEL_MASK;
    let mut i = 1;
    while i < 10 {
        // пять подряд идущих бит, младший: (i - 1)
        masks[i] = 0b1_1111 << (i - 1);
        i += 1;
    }
    masks
}

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << (rank.value() - 2)
}

/// Маска по набору карт. Повторы рангов схлопываются сами.
pub fn mask_from_cards(cards: &[Card]) -> RankMask {
    cards.iter().fold(0, |mask, c| mask | rank_to_bit(c.rank))
}

/// Найти стрит в битовой маске рангов.
/// Возвращает старшую карту стрита, если он есть (самый старший из возможных).
///
/// Особый случай: wheel (A2345) → Rank::Five, а не туз.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    STRAIGHT_MASKS
        .iter()
        .enumerate()
        .rev()
        .find(|(_, &sm)| rank_mask & sm == sm)
        .and_then(|(i, _)| Rank::from_value(i as u8 + 5))
}
